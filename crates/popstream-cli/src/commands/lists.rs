use color_eyre::Result;
use movie_list_core::filter_names;

use crate::commands::prompts;
use crate::output::Output;
use crate::store::LibraryStore;

/// Show custom lists, optionally narrowed by the list-name filter.
pub fn run_lists_show(filter: Option<&str>, store: &LibraryStore, output: &Output) -> Result<()> {
    let library = store.load()?;
    let names = filter_names(library.custom_names(), filter.unwrap_or(""));
    let rows: Vec<(String, usize)> = names
        .into_iter()
        .map(|name| {
            let count = library.custom(&name).map(|v| v.len()).unwrap_or(0);
            (name, count)
        })
        .collect();
    output.lists(&rows);
    Ok(())
}

pub fn run_lists_create(name: &str, store: &LibraryStore, output: &Output) -> Result<()> {
    let mut library = store.load()?;
    match library.create_custom_list(name) {
        Ok(()) => {
            store.save(&library)?;
            output.success(format!("Created list \"{}\"", name));
        }
        Err(err) => {
            output.error(err.to_string());
        }
    }
    Ok(())
}

pub fn run_lists_delete(
    name: &str,
    yes: bool,
    store: &LibraryStore,
    output: &Output,
) -> Result<()> {
    let mut library = store.load()?;

    if !library.has_custom_list(name) {
        // deletion is idempotent
        output.info(format!("No list named \"{}\" - nothing to delete", name));
        return Ok(());
    }

    let movie_count = library.custom(name).map(|v| v.len()).unwrap_or(0);
    if !yes {
        let confirmed = prompts::prompt_yes_no(
            &format!("Delete \"{}\" and its {} movie(s)?", name, movie_count),
            Some(false),
        )?;
        if !confirmed {
            output.info("Aborted");
            return Ok(());
        }
    }

    library.delete_custom_list(name);
    store.save(&library)?;
    output.success(format!("Deleted list \"{}\"", name));
    Ok(())
}
