use anyhow::Result;
use std::path::{Path, PathBuf};

/// Platform paths for config, persisted library data, and logs.
///
/// Everything lives under the platform config dir (e.g.
/// `~/.config/popstream` on Linux).
pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("popstream");

        Ok(Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir.join("data"),
            log_dir: base_dir.join("logs"),
        })
    }

    /// Rooted at an explicit base directory instead of the platform default.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base: PathBuf = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Persisted library state (the presentation layer's concern, not the
    /// registry's).
    pub fn library_file(&self) -> PathBuf {
        self.data_dir.join("library.json")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // POPSTREAM_BASE_PATH overrides the platform dirs (containers, tests)
        if let Ok(base) = std::env::var("POPSTREAM_BASE_PATH") {
            return Self::with_base(base);
        }
        Self::new().unwrap_or_else(|_| Self::with_base("/app"))
    }
}
