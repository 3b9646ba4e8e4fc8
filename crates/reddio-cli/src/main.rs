//! # reddio CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Reddio batch transfer payload tool.
///
/// Normalizes and checks batch transfer item files and builds request
/// bodies for the Reddio REST API.
#[derive(Parser, Debug)]
#[command(name = "reddio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Decode an item file and print it as normalized JSON.
    Inspect(reddio_cli::inspect::InspectArgs),
    /// Check items against the transfer message field limits.
    Check(reddio_cli::check::CheckArgs),
    /// Print the get-nonce request body for a stark key.
    NonceMessage(reddio_cli::nonce::NonceMessageArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => {
            println!("{}", reddio_cli::inspect::run(&args)?);
        }
        Commands::Check(args) => {
            let (report, all_ok) = reddio_cli::check::run(&args)?;
            if !report.is_empty() {
                println!("{report}");
            }
            if !all_ok {
                anyhow::bail!("some items cannot be signed as they stand");
            }
        }
        Commands::NonceMessage(args) => {
            println!("{}", reddio_cli::nonce::run(&args)?);
        }
    }

    Ok(())
}
