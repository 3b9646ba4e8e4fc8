//! # reddio-cli — Batch Transfer Payload Tooling
//!
//! Library half of the `reddio` binary. Argument structs and handlers live
//! here so they can be tested without spawning a process.
//!
//! ## Subcommands
//!
//! - `inspect` — decode item files and print them back as normalized JSON
//! - `check` — convert every item into a transfer message and report failures
//! - `nonce-message` — print the body of a get-nonce request
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to `reddio-core`; no wire logic here.
//! - Results go to stdout, logs go to stderr.

pub mod check;
pub mod input;
pub mod inspect;
pub mod nonce;
