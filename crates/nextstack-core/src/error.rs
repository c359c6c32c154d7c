//! Error taxonomy for the scaffolding pipeline

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Every way a scaffold run can terminate early.
///
/// Install failures are not listed: they are recorded on
/// [`InstallOutcome`](crate::runtime::InstallOutcome) and never propagate.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A command-line value was rejected before any prompt or filesystem access
    #[error("Invalid {name} '{value}'. Expected {expected}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        expected: String,
    },

    /// The user declined or cancelled a prompt
    #[error("{0}")]
    UserCancelled(String),

    /// An I/O failure while preparing, copying, or writing project files
    #[error("Failed to {action} {}: {source}", path.display())]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project manifest exists but could not be parsed or rewritten
    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// The template store description is unreadable or inconsistent
    #[error("Template store error: {0}")]
    TemplateStore(String),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

impl ScaffoldError {
    pub fn fs(action: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::UserCancelled(message.into())
    }

    /// Cancellation is a normal way to stop, not a failure worth detail
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::UserCancelled(_))
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArgument { .. }
            | Self::UserCancelled(_)
            | Self::FileSystem { .. }
            | Self::Manifest { .. }
            | Self::TemplateStore(_)
            | Self::Unknown(_) => 1,
        }
    }
}
