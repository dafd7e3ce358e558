use cloak_identity_types::CatalogError;
use thiserror::Error;

/// Errors from the Cloak CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Settings(#[from] cloak_identity_bridge::BridgeError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{count} coherence error(s) detected")]
    IncoherentProfile { count: usize },
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit code for this error.
    ///
    /// `check` distinguishes "the input is incoherent" (2) from "the
    /// command itself failed" (1) so scripts can branch on it.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::IncoherentProfile { .. } => 2,
            _ => 1,
        }
    }
}
