//! Flat text artifact: one address per line

use crate::output::traits::{OutputError, OutputHandler, OutputResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the visited list to a plain text file
///
/// The file is truncated on every write. Each address is followed by `\n`;
/// there is no header.
#[derive(Debug, Clone)]
pub struct TextFileOutput {
    path: PathBuf,
}

impl TextFileOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputHandler for TextFileOutput {
    fn write_visited(&self, visited: &[String]) -> OutputResult<()> {
        if self.path.exists() {
            tracing::debug!("Overwriting existing {}", self.path.display());
        } else {
            tracing::info!("Creating {}", self.path.display());
        }

        let file = File::create(&self.path).map_err(|source| OutputError::Create {
            path: self.path.clone(),
            source,
        })?;

        let write_error = |source| OutputError::Write {
            path: self.path.clone(),
            source,
        };

        let mut writer = BufWriter::new(file);
        for address in visited {
            writeln!(writer, "{}", address).map_err(write_error)?;
        }
        writer.flush().map_err(write_error)?;

        tracing::info!(
            "Wrote {} URLs to {}",
            visited.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
