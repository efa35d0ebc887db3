//! Error types for tree traversal and index building.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong in this crate.
///
/// Empty-tree queries and duplicate inserts are not errors. They return
/// `None`, `0` or `false` instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An iterator was advanced after it had already yielded every element.
    #[error("no more elements")]
    Exhausted,

    /// An input file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        /// The file that failed.
        path: PathBuf,
        /// What the OS reported.
        source: io::Error,
    },

    /// Reading from a caller supplied reader failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An ordering strategy name did not match any known strategy.
    #[error("unknown ordering strategy: {0:?}")]
    UnknownOrder(String),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
