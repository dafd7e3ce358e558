use thiserror::Error;

/// Errors from the settings bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("malformed settings fragment: {0}")]
    MalformedFragment(#[from] serde_json::Error),
}
