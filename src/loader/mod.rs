mod motions;
mod records;

pub use motions::load_motions;
pub use records::load_records;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::task::{self, JoinError};

/// Reads `path` and parses its content on the blocking pool.
async fn read_csv<T, F>(path: &Path, parse: F) -> Result<Vec<T>, LoaderError>
where
    T: Send + 'static,
    F: FnOnce(&str) -> Result<Vec<T>, csv::Error> + Send + 'static,
{
    let content = fs::read_to_string(path).await.map_err(|source| LoaderError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    let parsed = task::spawn_blocking(move || parse(&content)).await?;
    parsed.map_err(|source| LoaderError::Csv {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", io_message(source, path))]
    Io { source: io::Error, path: PathBuf },
    #[error("failed to parse '{}': {}", path.display(), source)]
    Csv { source: csv::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

fn io_message(source: &io::Error, path: &Path) -> String {
    match source.kind() {
        io::ErrorKind::NotFound => format!("CSV file not found: '{}'", path.display()),
        _ => format!("failed to read '{}': {}", path.display(), source),
    }
}
