use std::{io, path::PathBuf};

use thiserror::Error;

/// The ways generating the benchmark file can fail. All are I/O failures; the variant records
/// which step hit it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Returns the underlying I/O error.
    pub fn io(&self) -> &io::Error {
        match self {
            Error::Create { source, .. }
            | Error::Write { source, .. }
            | Error::Output { source } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
