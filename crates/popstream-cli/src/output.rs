use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use movie_list_models::Movie;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "✓".green(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "success", "message": msg.as_ref() }));
            }
        }
    }

    /// Errors are shown even in quiet mode.
    pub fn error(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => {
                eprintln!("{} {}", "✗".red(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "error", "message": msg.as_ref() }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                println!("{}", msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "info", "message": msg.as_ref() }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                println!("{} {}", "⚠".yellow(), msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": "warning", "message": msg.as_ref() }));
            }
        }
    }

    /// Render a sequence of movies under a heading.
    pub fn movies(&self, heading: &str, movies: &[Movie]) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                if movies.is_empty() {
                    println!("{}: no movies", heading.bold());
                    return;
                }
                println!("{}", heading.bold());
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["#", "Title", "Year", "Poster"]);
                for (i, movie) in movies.iter().enumerate() {
                    let year = match movie.release_year() {
                        0 => "-".to_string(),
                        y => y.to_string(),
                    };
                    table.add_row(vec![
                        Cell::new(i + 1),
                        Cell::new(&movie.title),
                        Cell::new(year),
                        Cell::new(movie.poster_url()),
                    ]);
                }
                println!("{table}");
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let items: Vec<_> = movies
                    .iter()
                    .map(|m| {
                        json!({
                            "id": m.id,
                            "title": m.title,
                            "year": m.release_year(),
                            "poster_url": m.poster_url(),
                        })
                    })
                    .collect();
                self.print_json(&json!({ "type": "movies", "heading": heading, "results": items }));
            }
        }
    }

    /// Render custom list names with their sizes.
    pub fn lists(&self, rows: &[(String, usize)]) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => {
                if rows.is_empty() {
                    println!("No custom lists yet. Create one with 'popstream lists create <NAME>'.");
                    return;
                }
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["List", "Movies"]);
                for (name, count) in rows {
                    table.add_row(vec![Cell::new(name), Cell::new(count)]);
                }
                println!("{table}");
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let items: Vec<_> = rows
                    .iter()
                    .map(|(name, count)| json!({ "name": name, "movies": count }))
                    .collect();
                self.print_json(&json!({ "type": "lists", "results": items }));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}
