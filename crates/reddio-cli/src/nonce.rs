//! # Nonce Message Subcommand
//!
//! Prints the JSON body of a get-nonce request for a stark key.

use clap::Args;
use reddio_core::GetNonceMessage;

/// Arguments for the nonce-message subcommand.
#[derive(Args, Debug)]
pub struct NonceMessageArgs {
    /// Stark key to fetch the nonce for.
    pub stark_key: String,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: &NonceMessageArgs) -> anyhow::Result<String> {
    let msg = GetNonceMessage::new(args.stark_key.as_str());
    let text = if args.pretty {
        serde_json::to_string_pretty(&msg)?
    } else {
        serde_json::to_string(&msg)?
    };
    Ok(text)
}
