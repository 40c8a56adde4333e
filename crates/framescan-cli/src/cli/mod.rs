//! CLI argument parsing and dispatch.
//!
//! This module provides the command-line interface for framescan using clap's
//! derive API.
//!
//! # Example
//!
//! ```bash
//! framescan error.log
//! framescan --json --limit 5 error.log
//! dotnet run 2>&1 | framescan --report-skipped
//! ```

mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::FramescanConfig;
use crate::output::OutputMode;

pub use execute::{ScanSummary, scan};
pub use types::FormatArg;
pub use validators::validate_limit;

/// Framescan - extract frames from .NET and Mono stack traces
///
/// Reads a stack trace and prints one entry per frame with its declaring type,
/// method, parameters and source location.
#[derive(Parser, Debug)]
#[command(name = "framescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Stack trace file to read (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output in JSON format for programmatic use
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Stop after this many frames
    #[arg(short = 'n', long, value_parser = validate_limit)]
    pub limit: Option<usize>,

    /// Configuration file (defaults to `$FRAMESCAN_CONFIG`, then `.framescan.yaml`)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report skipped and unrecognized lines on stderr
    #[arg(long)]
    pub report_skipped: bool,

    /// Fail if a frame-shaped line (`at Type.Method(...`) matched no grammar
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Layer command-line flags over a loaded configuration.
    ///
    /// Flags only ever switch behavior on; a flag that is absent leaves the
    /// configured value alone.
    pub fn apply_to(&self, config: &mut FramescanConfig) {
        if self.json {
            config.format = OutputMode::Json;
        } else if let Some(format) = self.format {
            config.format = format.into();
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        if self.report_skipped {
            config.report_skipped = true;
        }
        if self.strict {
            config.strict = true;
        }
        if self.no_color {
            config.color = false;
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        execute::execute(self).await?;
        Ok(())
    }
}
