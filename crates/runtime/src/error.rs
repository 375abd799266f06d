use wilds_core::{OracleError, PartyError};

/// Fatal startup errors. Gameplay rejections never surface here; they are
/// reported as feedback events instead.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("static data lookup failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("party setup failed: {0}")]
    Party(#[from] PartyError),
}
