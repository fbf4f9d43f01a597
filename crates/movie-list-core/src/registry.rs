use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use movie_list_models::Movie;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::Collection;
use crate::error::RegistryError;

#[cfg(test)]
#[path = "registry/tests.rs"]
mod tests;

/// The four collections that always exist for the lifetime of a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixedList {
    Favorites,
    Watching,
    Watched,
    Pending,
}

impl FixedList {
    pub const ALL: [FixedList; 4] = [
        FixedList::Favorites,
        FixedList::Watching,
        FixedList::Watched,
        FixedList::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FixedList::Favorites => "favorites",
            FixedList::Watching => "watching",
            FixedList::Watched => "watched",
            FixedList::Pending => "pending",
        }
    }
}

impl fmt::Display for FixedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixedList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favorites" => Ok(FixedList::Favorites),
            "watching" => Ok(FixedList::Watching),
            "watched" => Ok(FixedList::Watched),
            "pending" => Ok(FixedList::Pending),
            other => Err(format!(
                "unknown fixed list: {}. Use 'favorites', 'watching', 'watched', or 'pending'",
                other
            )),
        }
    }
}

/// Selector for any collection in the library, fixed or custom.
///
/// Parsing tries the fixed names first; anything else names a custom list
/// verbatim (custom names are case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListId {
    Fixed(FixedList),
    Custom(String),
}

impl ListId {
    /// Every string names some list: the four fixed names (any case) map to
    /// `Fixed`, anything else is a custom-list name taken verbatim.
    pub fn parse(s: &str) -> Self {
        match FixedList::from_str(s) {
            Ok(fixed) => ListId::Fixed(fixed),
            Err(_) => ListId::Custom(s.to_string()),
        }
    }
}

impl FromStr for ListId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListId::Fixed(fixed) => f.write_str(fixed.as_str()),
            ListId::Custom(name) => f.write_str(name),
        }
    }
}

/// The collection registry: four fixed collections plus user-named custom
/// lists.
///
/// All collections start empty. Custom list names are case-sensitive and
/// unique; they are stored exactly as given (the blank check trims, the
/// stored key does not). A failed operation leaves every collection
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Library {
    favorites: Collection,
    watching: Collection,
    watched: Collection,
    pending: Collection,
    /// Sorted map so iteration order is deterministic for display.
    #[serde(default)]
    custom: BTreeMap<String, Collection>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    fn fixed_mut(&mut self, list: FixedList) -> &mut Collection {
        match list {
            FixedList::Favorites => &mut self.favorites,
            FixedList::Watching => &mut self.watching,
            FixedList::Watched => &mut self.watched,
            FixedList::Pending => &mut self.pending,
        }
    }

    /// Read-only view of a fixed collection, in insertion order.
    pub fn fixed(&self, list: FixedList) -> &[Movie] {
        match list {
            FixedList::Favorites => self.favorites.as_slice(),
            FixedList::Watching => self.watching.as_slice(),
            FixedList::Watched => self.watched.as_slice(),
            FixedList::Pending => self.pending.as_slice(),
        }
    }

    /// Append `movie` to a fixed collection. Already-present movies are
    /// left alone; returns true when the movie was inserted.
    pub fn add_to_fixed(&mut self, list: FixedList, movie: Movie) -> bool {
        let title = movie.title.clone();
        let added = self.fixed_mut(list).add(movie);
        if added {
            debug!(list = %list, title = %title, "added to fixed collection");
        } else {
            debug!(list = %list, title = %title, "already in fixed collection, skipping");
        }
        added
    }

    /// Remove the first occurrence of `movie` from a fixed collection;
    /// no-op when absent.
    pub fn remove_from_fixed(&mut self, list: FixedList, movie: &Movie) -> bool {
        self.fixed_mut(list).remove(movie)
    }

    /// Create an empty custom list under `name`.
    ///
    /// Rejects names that are blank after trimming and names already in
    /// use (exact, case-sensitive match). The name is stored as given.
    pub fn create_custom_list(&mut self, name: &str) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyListName);
        }
        if self.custom.contains_key(name) {
            return Err(RegistryError::DuplicateListName {
                name: name.to_string(),
            });
        }
        self.custom.insert(name.to_string(), Collection::new());
        debug!(list = name, "created custom list");
        Ok(())
    }

    /// Delete a custom list and its contents. Deleting a missing list is a
    /// no-op; returns true when a list was removed.
    pub fn delete_custom_list(&mut self, name: &str) -> bool {
        let removed = self.custom.remove(name).is_some();
        if removed {
            debug!(list = name, "deleted custom list");
        }
        removed
    }

    /// Append `movie` to the named custom list.
    ///
    /// Unlike the fixed collections, adding a movie already in the list is
    /// reported as an error so the caller can tell the user; the list is
    /// left unchanged.
    pub fn add_to_custom(&mut self, name: &str, movie: Movie) -> Result<(), RegistryError> {
        let collection = self
            .custom
            .get_mut(name)
            .ok_or_else(|| RegistryError::ListNotFound {
                name: name.to_string(),
            })?;
        if collection.contains(&movie) {
            return Err(RegistryError::DuplicateMembership {
                list: name.to_string(),
                title: movie.title,
            });
        }
        debug!(list = name, title = %movie.title, "added to custom list");
        collection.add(movie);
        Ok(())
    }

    /// Remove the first occurrence of `movie` from the named custom list.
    /// No-op when the list does not exist or the movie is absent.
    pub fn remove_from_custom(&mut self, name: &str, movie: &Movie) -> bool {
        match self.custom.get_mut(name) {
            Some(collection) => collection.remove(movie),
            None => false,
        }
    }

    /// Read-only view of a custom list, in insertion order.
    pub fn custom(&self, name: &str) -> Result<&[Movie], RegistryError> {
        self.custom
            .get(name)
            .map(|c| c.as_slice())
            .ok_or_else(|| RegistryError::ListNotFound {
                name: name.to_string(),
            })
    }

    /// Resolve either kind of collection by selector.
    pub fn collection(&self, id: &ListId) -> Result<&[Movie], RegistryError> {
        match id {
            ListId::Fixed(fixed) => Ok(self.fixed(*fixed)),
            ListId::Custom(name) => self.custom(name),
        }
    }

    /// Add to either kind of collection.
    ///
    /// Fixed collections keep their quiet-no-op duplicate handling, so
    /// `Ok(false)` means "already there"; custom lists report duplicates as
    /// errors and return `Ok(true)` on insertion.
    pub fn add(&mut self, id: &ListId, movie: Movie) -> Result<bool, RegistryError> {
        match id {
            ListId::Fixed(fixed) => Ok(self.add_to_fixed(*fixed, movie)),
            ListId::Custom(name) => self.add_to_custom(name, movie).map(|_| true),
        }
    }

    /// Remove from either kind of collection; no-op when absent.
    pub fn remove(&mut self, id: &ListId, movie: &Movie) -> bool {
        match id {
            ListId::Fixed(fixed) => self.remove_from_fixed(*fixed, movie),
            ListId::Custom(name) => self.remove_from_custom(name, movie),
        }
    }

    pub fn has_custom_list(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    /// Custom list names in sorted order.
    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.custom.keys().map(|s| s.as_str())
    }

    pub fn custom_list_count(&self) -> usize {
        self.custom.len()
    }
}
