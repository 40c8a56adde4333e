//! Command execution logic.

use framescan::parse_frames;
use framescan::warning::Warning;
use std::io::{self, Write};

use super::Cli;
use crate::config::FramescanConfig;
use crate::error::{Error, Result};
use crate::input;
use crate::output::{self, OutputConfig};

/// What a scan produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of frames written.
    pub frames: usize,
    /// Lines skipped before the scan stopped.
    pub warnings: Vec<Warning>,
}

/// Extract frames from `text` and write them to `out`.
///
/// Warnings go to `err` when `report_skipped` is set. With a limit, only the
/// lines read before the limit was reached are inspected.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedFrames`] in strict mode when any scanned line
/// looked like a frame but matched no grammar, [`Error::Json`] when frames
/// cannot be serialized, and [`Error::Io`] when writing fails.
pub fn scan<W: Write, E: Write>(
    text: &str,
    config: &FramescanConfig,
    output_config: &OutputConfig,
    out: &mut W,
    err: &mut E,
) -> Result<ScanSummary> {
    let mut frames = parse_frames(text).collect_warnings();
    let limit = config.limit.unwrap_or(usize::MAX);
    let count = output::write_frames(
        out,
        frames.by_ref().take(limit),
        config.format,
        output_config,
    )?;

    let warnings = frames.take_warnings();
    tracing::debug!(frames = count, skipped = warnings.len(), "scan complete");

    if config.report_skipped {
        output::write_warnings(err, &warnings, output_config)?;
    }

    let unrecognized = warnings.iter().filter(|w| w.is_unrecognized_frame()).count();
    if config.strict && unrecognized > 0 {
        return Err(Error::UnrecognizedFrames(unrecognized));
    }

    Ok(ScanSummary {
        frames: count,
        warnings,
    })
}

/// Execute a full run: resolve configuration, read input, scan.
pub async fn execute(cli: &Cli) -> Result<ScanSummary> {
    let current_dir = std::env::current_dir()?;
    let mut config = FramescanConfig::discover(cli.config.as_deref(), &current_dir).await?;
    cli.apply_to(&mut config);

    let output_config = OutputConfig::from_env(config.color);
    let text = input::read_trace(cli.input.as_deref()).await?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    scan(
        &text,
        &config,
        &output_config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
