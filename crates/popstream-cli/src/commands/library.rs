use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_list_catalog::MovieCatalog;
use movie_list_config::Config;
use movie_list_core::{filter_by_title, ListId};
use movie_list_models::Movie;

use crate::commands::catalog::catalog_client;
use crate::commands::prompts;
use crate::output::Output;
use crate::store::LibraryStore;

/// Search the catalog and add the chosen result to a collection.
pub async fn run_add(
    list: &str,
    query: &str,
    pick: Option<usize>,
    config: &Config,
    store: &LibraryStore,
    output: &Output,
) -> Result<()> {
    let id = ListId::parse(list);
    let client = catalog_client(config)?;

    let results = client.search(query).await?;
    if results.is_empty() {
        output.warn(format!("No catalog results for \"{}\"", query));
        return Ok(());
    }

    let movie = choose_result(&results, pick)?;
    let mut library = store.load()?;

    match library.add(&id, movie.clone()) {
        Ok(true) => {
            store.save(&library)?;
            output.success(format!("Added \"{}\" to {}", movie.title, id));
        }
        Ok(false) => {
            output.info(format!(
                "\"{}\" is already in {} - nothing to do",
                movie.title, id
            ));
        }
        Err(err) => {
            // recoverable registry failures are user messages, not aborts
            output.error(err.to_string());
        }
    }
    Ok(())
}

fn choose_result(results: &[Movie], pick: Option<usize>) -> Result<Movie> {
    if let Some(n) = pick {
        return results
            .get(n.checked_sub(1).ok_or_else(|| eyre!("--pick is 1-based"))?)
            .cloned()
            .ok_or_else(|| eyre!("--pick {} is out of range (1..={})", n, results.len()));
    }
    if results.len() == 1 {
        return Ok(results[0].clone());
    }
    let labels: Vec<String> = results
        .iter()
        .map(|m| match m.release_year() {
            0 => m.title.clone(),
            y => format!("{} ({})", m.title, y),
        })
        .collect();
    let idx = prompts::prompt_select("Several matches - which one?", &labels)?;
    Ok(results[idx].clone())
}

/// Remove the first stored movie whose title matches exactly.
pub fn run_remove(list: &str, title: &str, store: &LibraryStore, output: &Output) -> Result<()> {
    let id = ListId::parse(list);
    let mut library = store.load()?;

    let target = match library.collection(&id) {
        Ok(view) => view.iter().find(|m| m.title == title).cloned(),
        Err(err) => {
            // removal from a missing list is a no-op, but tell the user
            output.warn(err.to_string());
            return Ok(());
        }
    };

    match target {
        Some(movie) => {
            library.remove(&id, &movie);
            store.save(&library)?;
            output.success(format!("Removed \"{}\" from {}", movie.title, id));
        }
        None => {
            output.info(format!("\"{}\" is not in {} - nothing to remove", title, id));
        }
    }
    Ok(())
}

/// Display a collection, optionally narrowed by the title filter.
pub fn run_show(
    list: &str,
    filter: Option<&str>,
    store: &LibraryStore,
    output: &Output,
) -> Result<()> {
    let id = ListId::parse(list);
    let library = store.load()?;

    let view = match library.collection(&id) {
        Ok(view) => view,
        Err(err) => {
            output.error(err.to_string());
            return Ok(());
        }
    };

    match filter {
        Some(query) => {
            let hits = filter_by_title(view, query);
            output.movies(&format!("{} (filter: \"{}\")", id, query), &hits);
        }
        None => output.movies(&id.to_string(), view),
    }
    Ok(())
}
