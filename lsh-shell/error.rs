// This file is part of the lsh package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Growing the line buffer failed; the shell cannot continue safely.
    #[error("allocation error")]
    Allocation(#[from] TryReserveError),

    /// A builtin was invoked without the arguments it needs.
    #[error("{0}")]
    MissingArgument(String),

    /// A filesystem operation inside a builtin failed.
    #[error("{}: {source}", .path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program}: wait failed: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("history save: {}: {source}", .path.display())]
    HistorySave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs {
            path: path.into(),
            source,
        }
    }

    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument(message.into())
    }

    /// Allocation failures abort the process; everything else is reported and the shell carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Allocation(_))
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
