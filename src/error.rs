use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Filter parameters rejected at construction time.
    #[error("invalid filter parameters: {0}")]
    InvalidParameters(String),

    /// A word-list source could not be opened or read. Word lists are
    /// local files, so there is no retry; the failing path is carried
    /// for the caller.
    #[error("cannot read word list {}: {source}", path.display())]
    Source {
        path: PathBuf,
        source: io::Error,
    },
}
