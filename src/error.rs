//! Error type shared by every toolkit operation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the toolkit.
///
/// Record-level variants ([`InvalidMnemonic`](ToolkitError::InvalidMnemonic),
/// [`InvalidPrivateKey`](ToolkitError::InvalidPrivateKey)) are turned into
/// skipped lines by the batch operations. The remaining variants abort the
/// current operation and are reported by the menu.
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("invalid input {input:?}: enter a number greater than 0")]
    InvalidCount { input: String },

    #[error("invalid choice {input:?}: enter a number between 1 and 4")]
    InvalidChoice { input: String },

    #[error("unsupported mnemonic length {words}: use 12 or 24 words")]
    InvalidWordCount { words: u32 },

    #[error("input file '{}' not found. Run option 1 first to create it", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("invalid mnemonic: {reason}")]
    InvalidMnemonic { reason: String },

    #[error("invalid private key: {reason}")]
    InvalidPrivateKey { reason: String },

    #[error("key derivation failed: {reason}")]
    Derivation { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
