use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading the seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Reads seed addresses from a file, one per line, in file order
///
/// Lines are taken verbatim apart from the line terminator. A missing file is
/// reported as `SeedError::NotFound` so callers can skip the crawl.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use trawler::input::read_seed_file;
///
/// let seeds = read_seed_file(Path::new("traversedFiles.txt")).unwrap();
/// println!("{} seeds", seeds.len());
/// ```
pub fn read_seed_file(path: &Path) -> Result<Vec<String>, SeedError> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SeedError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SeedError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let seeds = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Read {} seeds from {}", seeds.len(), path.display());
    Ok(seeds)
}
