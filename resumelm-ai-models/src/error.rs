//! Registry error types.

use thiserror::Error;

/// Errors raised when parsing registry identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Provider id is not one of the registry providers.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
