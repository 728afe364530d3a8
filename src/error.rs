//! Error types for configuration construction and overrides

use thiserror::Error;

/// Errors surfaced while building or reconfiguring a [`Config`].
///
/// All validation is local and synchronous: a failed construction produces
/// no configuration, and a failed override leaves the previous value in
/// place. Query operations on a successfully built configuration never fail.
///
/// [`Config`]: crate::Config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A service or characteristic identifier was not a well-formed
    /// 128-bit UUID.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] uuid::Error),

    /// A marker override would make sentinel detection ambiguous.
    #[error("Invalid marker: {0}")]
    InvalidMarker(String),
}
