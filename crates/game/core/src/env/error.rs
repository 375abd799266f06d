/// Errors produced when requested static data is missing.
///
/// These indicate configuration mistakes and are raised at startup, never
/// mid-session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("character '{name}' is not in the roster")]
    UnknownCharacter { name: String },

    #[error("enemy kind '{kind}' is not in the catalog")]
    UnknownEnemyKind { kind: String },
}
