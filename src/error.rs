use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a ring analysis run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {} (line {line}): {details}", path.display())]
    Format {
        path: PathBuf,
        line: usize,
        details: String,
    },

    /// Declared and actual manual connection counts disagree.
    #[error(
        "{} declares {declared} connections but {read} were read",
        path.display()
    )]
    Consistency {
        path: PathBuf,
        declared: usize,
        read: usize,
    },

    #[error("vertex {index} does not exist (graph has {count} vertices)")]
    UnknownVertex { index: usize, count: usize },

    /// A statistic was requested over an empty population.
    #[error("statistics undefined: {0}")]
    Statistics(&'static str),

    #[error("invalid parameters: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
    pub fn format(path: impl Into<PathBuf>, line: usize, details: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            line,
            details: details.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
