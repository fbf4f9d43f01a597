use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use movie_list_config::PathManager;
use movie_list_core::Library;
use std::path::PathBuf;
use tracing::debug;

/// Loads and saves the library between CLI invocations.
///
/// The registry itself performs no I/O; persisting its state is this
/// frontend's job. One JSON file under the data dir.
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(paths: &PathManager) -> Self {
        Self {
            path: paths.library_file(),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted library; a missing file yields an empty one.
    pub fn load(&self) -> Result<Library> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no library file, starting empty");
            return Ok(Library::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read library file: {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse library file: {}", self.path.display()))
    }

    pub fn save(&self, library: &Library) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents =
            serde_json::to_string_pretty(library).wrap_err("Failed to serialize library")?;
        std::fs::write(&self.path, contents)
            .wrap_err_with(|| format!("Failed to write library file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), "saved library");
        Ok(())
    }
}
