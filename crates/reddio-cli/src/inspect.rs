//! # Inspect Subcommand
//!
//! Decodes an item file and prints it back as normalized JSON: every wire
//! key present, unset optionals as `null`, unknown keys dropped.

use std::path::PathBuf;

use clap::Args;

use crate::input::{load_batch, Batch};

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Item file (JSON or YAML), or `-` for JSON on stdin.
    pub path: PathBuf,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

/// Render a batch as JSON in the shape it was read.
pub fn render(batch: &Batch, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(batch)?
    } else {
        serde_json::to_string(batch)?
    };
    Ok(text)
}

/// Run the subcommand and return what should be printed.
pub fn run(args: &InspectArgs) -> anyhow::Result<String> {
    let batch = load_batch(&args.path)?;
    tracing::info!(path = %args.path.display(), items = batch.len(), "inspected batch");
    render(&batch, args.pretty)
}
