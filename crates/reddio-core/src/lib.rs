//! # reddio-core — Wire Records for the Reddio REST API
//!
//! Typed request records for the Reddio layer 2 API, with the exact JSON
//! shapes the API expects.
//!
//! ## Contents
//!
//! - [`BatchTransferItem`] — one line item of a batch transfer.
//! - [`Signature`] — the Stark `(r, s)` signature embedded in items.
//! - [`GetNonceMessage`] — body of the get-nonce request.
//! - [`TransferMsg`] — an item parsed and range checked for the signer.
//!
//! ## Crate Policy
//!
//! - Records never validate on construction or decode. Checks live in
//!   [`TransferMsg`] and run only when asked for.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Wire keys are fixed by serde attributes and mirrored in
//!   [`BatchTransferItem::WIRE_KEYS`].

pub mod error;
pub mod nonce;
pub mod signature;
pub mod transfer;
pub mod transfer_msg;

// Re-export primary types for ergonomic imports.
pub use error::{ReddioError, TransferMsgError};
pub use nonce::GetNonceMessage;
pub use signature::Signature;
pub use transfer::BatchTransferItem;
pub use transfer_msg::TransferMsg;
