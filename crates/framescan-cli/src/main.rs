//! Framescan CLI binary.

use anyhow::Result;
use framescan_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the framescan CLI.
///
/// Uses tokio's current_thread runtime; the only I/O is one read of the input.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with frame output.
    // Example: RUST_LOG=framescan=trace framescan error.log
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("framescan=info,framescan_cli=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting framescan CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Framescan CLI completed successfully");
    Ok(())
}
