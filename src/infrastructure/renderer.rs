// src/infrastructure/renderer.rs
use crate::constants::PAGE_FILE_PREFIX;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::{debug, instrument};

/// Writes a rendered page to disk and hands it to the system browser.
#[derive(Debug, Default)]
pub struct PageRenderer;

impl PageRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to a fresh `.html` file in the temp directory.
    ///
    /// The file is kept after the process exits so the browser can still
    /// load it.
    pub fn create_temp_file(&self, content: &str) -> Result<PathBuf> {
        let mut file = Builder::new()
            .prefix(PAGE_FILE_PREFIX)
            .suffix(".html")
            .rand_bytes(5)
            .tempfile()
            .context("Failed to create temporary file")?;

        file.write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        let (_, path) = file.keep().context("Failed to keep temporary file")?;
        debug!(?path, "Wrote page");
        Ok(path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        Ok(())
    }
}
