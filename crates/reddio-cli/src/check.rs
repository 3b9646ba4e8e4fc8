//! # Check Subcommand
//!
//! Converts every item of a file into a transfer message and reports which
//! ones cannot be signed as they stand.

use std::path::PathBuf;

use clap::Args;
use reddio_core::{BatchTransferItem, TransferMsg, TransferMsgError};

use crate::input::load_batch;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Item file (JSON or YAML), or `-` for JSON on stdin.
    pub path: PathBuf,
}

/// Result of converting one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub index: usize,
    pub result: Result<TransferMsg, TransferMsgError>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.result {
            Ok(_) => write!(f, "item {}: ok", self.index),
            Err(e) => write!(f, "item {}: {e}", self.index),
        }
    }
}

/// Convert each item, keeping its position in the batch.
pub fn check_items(items: &[BatchTransferItem]) -> Vec<CheckOutcome> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CheckOutcome {
            index,
            result: TransferMsg::try_from(item),
        })
        .collect()
}

/// Run the subcommand. Returns the report and whether every item passed.
pub fn run(args: &CheckArgs) -> anyhow::Result<(String, bool)> {
    let batch = load_batch(&args.path)?;
    let outcomes = check_items(batch.items());
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "items failed transfer message checks");
    }
    let report = outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Ok((report, failed == 0))
}
