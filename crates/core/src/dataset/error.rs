use std::{num::ParseFloatError, path::PathBuf};

/// Errors that can occur while loading a [`Dataset`](super::Dataset).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: cannot parse {token:?} as a number: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
