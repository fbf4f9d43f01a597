use thiserror::Error;

/// Recoverable registry failures, surfaced to the caller for display.
///
/// A failed operation never mutates the registry; callers can retry or
/// report the message and move on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("list name cannot be empty")]
    EmptyListName,

    #[error("a list named \"{name}\" already exists")]
    DuplicateListName { name: String },

    #[error("no list named \"{name}\"")]
    ListNotFound { name: String },

    #[error("\"{title}\" is already in \"{list}\"")]
    DuplicateMembership { list: String, title: String },
}
