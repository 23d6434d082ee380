//! Reseed-specific errors
//!
//! Only the in-memory part of the tool can fail with these, everything that
//! touches the filesystem goes through [`anyhow`] in [crate::fs].
use thiserror::Error;

/// An error that parsing a nodes listing could end up producing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReseedError {
    /// `line` is 1-based, `reason` is the message of the integer parser.
    #[error("invalid value '{value}' at line {line}: {reason}")]
    InvalidValue {
        line: usize,
        value: String,
        reason: String,
    },
}
