use clap::{ArgAction, Parser, Subcommand};
use commands::{catalog, config, library, lists};
use movie_list_config::{Config, PathManager};

mod commands;
mod logging;
mod output;
mod store;

#[derive(Parser)]
#[command(name = "popstream")]
#[command(about = "PopStream - Track movies in favorites, watching, watched, pending, and your own lists")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse popular movies from the catalog
    Browse,

    /// Search the catalog by title
    Search {
        /// Title query (empty falls back to popular movies)
        query: String,
    },

    /// Search the catalog and add a result to a collection
    #[command(long_about = "Search the catalog and add a result to a fixed collection (favorites, \
watching, watched, pending) or to a custom list. With several matches you pick interactively \
unless --pick is given. Adding a movie already in a fixed collection does nothing; adding one \
already in a custom list is reported as an error.")]
    Add {
        /// Target collection: a fixed name or a custom list name
        list: String,

        /// Catalog title query
        query: String,

        /// Take the Nth search result (1-based) instead of picking interactively
        #[arg(long, value_name = "N")]
        pick: Option<usize>,
    },

    /// Remove a movie from a collection by exact title
    Remove {
        /// Collection: a fixed name or a custom list name
        list: String,

        /// Exact title of the stored movie
        title: String,
    },

    /// Show a collection
    Show {
        /// Collection: a fixed name or a custom list name
        list: String,

        /// Case-insensitive title filter
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
    },

    /// Manage custom lists (bare 'lists' shows them all)
    Lists {
        #[command(subcommand)]
        cmd: Option<ListsCommands>,
    },

    /// Configure the TMDB catalog and settings
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ListsCommands {
    /// Show custom lists, optionally filtered by name
    Show {
        /// Case-insensitive list-name filter
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
    },

    /// Create a new custom list
    Create {
        /// List name (case-sensitive, must be unique and non-blank)
        name: String,
    },

    /// Delete a custom list and its contents
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the unmasked API key
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Configure TMDB credentials
    Tmdb {
        /// TMDB v3 API key (prompts when omitted)
        #[arg(long)]
        api_key: Option<String>,
    },
}


#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let paths = PathManager::default();
    let config = Config::load(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load configuration: {}", e))?;
    let store = store::LibraryStore::new(&paths);

    match cli.command {
        Commands::Browse => catalog::run_browse(&config, &output).await,
        Commands::Search { query } => catalog::run_search(&query, &config, &output).await,
        Commands::Add { list, query, pick } => {
            library::run_add(&list, &query, pick, &config, &store, &output).await
        }
        Commands::Remove { list, title } => library::run_remove(&list, &title, &store, &output),
        Commands::Show { list, filter } => {
            library::run_show(&list, filter.as_deref(), &store, &output)
        }
        Commands::Lists { cmd } => match cmd {
            None => lists::run_lists_show(None, &store, &output),
            Some(ListsCommands::Show { filter }) => {
                lists::run_lists_show(filter.as_deref(), &store, &output)
            }
            Some(ListsCommands::Create { name }) => lists::run_lists_create(&name, &store, &output),
            Some(ListsCommands::Delete { name, yes }) => {
                lists::run_lists_delete(&name, yes, &store, &output)
            }
        },
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show { full } => config::run_config_show(full, &paths, &output),
            ConfigCommands::Tmdb { api_key } => config::run_config_tmdb(api_key, &paths, &output),
        },
    }
}
