//! FaqClaw error taxonomy.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FaqClawError>;

#[derive(Debug, Error)]
pub enum FaqClawError {
    /// Catalog source unreadable, malformed, or missing required fields.
    /// Fatal at load time — never swallowed.
    #[error("Data error: {0}")]
    Data(String),

    #[error("Config error: {0}")]
    Config(String),

    /// Transport failure on a delivery surface (IMAP, SMTP, terminal I/O).
    /// Surfaces log these and keep going; they never reach the engine.
    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
