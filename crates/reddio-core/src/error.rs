//! # Error Types
//!
//! Errors produced by the wire records in this crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Decoding errors wrap the underlying `serde_json::Error` so the caller
//!   sees the exact line/column and the offending field.
//! - Transfer message conversion errors name the wire key that failed and
//!   the reason, never the value of a key or signature.

use thiserror::Error;

/// Top-level error type for the Reddio wire records.
#[derive(Error, Debug)]
pub enum ReddioError {
    /// Malformed JSON or a field of the wrong JSON type.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error converting a [`BatchTransferItem`](crate::BatchTransferItem) into a
/// [`TransferMsg`](crate::TransferMsg).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferMsgError {
    /// A required field is unset (empty string or null).
    #[error("field `{field}` is missing")]
    Missing {
        /// Wire key of the field.
        field: &'static str,
    },

    /// A decimal string field contains something other than ASCII digits.
    #[error("field `{field}` is not a decimal integer: {reason}")]
    InvalidDecimal {
        /// Wire key of the field.
        field: &'static str,
        /// What was wrong with the input.
        reason: String,
    },

    /// A hex string field contains something other than hex digits.
    #[error("field `{field}` is not a hex integer: {reason}")]
    InvalidHex {
        /// Wire key of the field.
        field: &'static str,
        /// What was wrong with the input.
        reason: String,
    },

    /// An integer field holds a negative value.
    #[error("field `{field}` must not be negative, got {value}")]
    Negative {
        /// Wire key of the field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A hex value is not below the Stark field prime.
    #[error("field `{field}` is not a Stark field element")]
    NotFieldElement {
        /// Wire key of the field.
        field: &'static str,
    },

    /// A value does not fit the bit width of its slot in the packed message.
    #[error("field `{field}` exceeds {bits} bits")]
    OutOfRange {
        /// Wire key of the field.
        field: &'static str,
        /// Width of the slot in bits.
        bits: u32,
    },
}
