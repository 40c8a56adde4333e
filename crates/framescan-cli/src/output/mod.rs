//! Output formatting for extracted frames.
//!
//! Frames are written either as human-readable text, one numbered block per
//! frame, or as a pretty-printed JSON array for programmatic use. Skipped-line
//! reports always go to the error stream so they never mix with frame output.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use framescan::Frame;
use framescan::warning::Warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::{self, Write};

use crate::error::Result;

// ============================================================================
// Output Configuration
// ============================================================================

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic use
    Json,
}

/// Configuration for text output styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` from a requested color setting, honoring the
    /// environment.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `FRAMESCAN_COLOR`: Set to "0" or "false" to disable colors
    pub fn from_env(requested: bool) -> Self {
        Self {
            use_colors: colors_allowed(
                requested,
                env::var_os("NO_COLOR").is_some(),
                env::var("FRAMESCAN_COLOR").ok().as_deref(),
            ),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Combines the requested color setting with `NO_COLOR` and `FRAMESCAN_COLOR`.
pub(crate) fn colors_allowed(requested: bool, no_color: bool, framescan_color: Option<&str>) -> bool {
    // Respect NO_COLOR standard (https://no-color.org/)
    if !requested || no_color {
        return false;
    }
    match framescan_color {
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
        Some(v) if v.is_empty() || v == "1" || v.eq_ignore_ascii_case("true") => true,
        Some(v) => {
            tracing::warn!(
                env_var = "FRAMESCAN_COLOR",
                value = %v,
                "Invalid value (expected '1', 'true', '0', or 'false'), using default"
            );
            true
        }
        None => true,
    }
}

// ============================================================================
// Frame Output
// ============================================================================

/// Write one frame as a numbered text block.
pub fn write_frame_text<W: Write>(
    w: &mut W,
    index: usize,
    frame: &Frame,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}.{}{}",
        color::frame_index(index, config),
        color::type_name(&frame.type_name, config),
        color::method_name(&frame.method_name, config),
        color::dimmed(&frame.parameter_list, config),
    )?;

    if let (Some(file), Some(line)) = (&frame.file, &frame.line) {
        writeln!(
            w,
            "    {}",
            color::dimmed(&format!("at {file}:{line}"), config)
        )?;
    }
    Ok(())
}

/// Write all frames in the requested format.
///
/// Text output is written frame by frame as the iterator advances; JSON output
/// is collected into one array first.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::error::Error::Json) when the frames cannot
/// be serialized and [`Error::Io`](crate::error::Error::Io) when writing fails.
pub fn write_frames<W, I>(
    w: &mut W,
    frames: I,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Frame>,
{
    match mode {
        OutputMode::Text => {
            let mut count = 0;
            for (index, frame) in frames.into_iter().enumerate() {
                write_frame_text(w, index, &frame, config)?;
                count += 1;
            }
            if count == 0 {
                writeln!(w, "No frames found.")?;
            }
            Ok(count)
        }
        OutputMode::Json => {
            let frames: Vec<Frame> = frames.into_iter().collect();
            let json = serde_json::to_string_pretty(&frames)?;
            writeln!(w, "{json}")?;
            Ok(frames.len())
        }
    }
}

/// Write skipped-line reports, one per line.
pub fn write_warnings<W: Write>(
    w: &mut W,
    warnings: &[Warning],
    config: &OutputConfig,
) -> io::Result<()> {
    for warning in warnings {
        writeln!(
            w,
            "{} {}",
            color::warning("warning:", config),
            warning
        )?;
    }
    Ok(())
}
