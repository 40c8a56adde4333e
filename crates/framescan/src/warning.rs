//! Reports for lines that produced no frame.
//!
//! Skipping a line is never an error. A [`Frames`](crate::Frames) iterator
//! built with [`collect_warnings`](crate::Frames::collect_warnings) keeps one
//! [`Warning`] per non-blank skipped line, in input order, for the lines it
//! has consumed so far.
//!
//! ```
//! use framescan::parse_frames;
//! use framescan::warning::Warning;
//!
//! let trace = "System.Exception: boom\n   at App.Program.Run(String name\n   at App.Program.Main()";
//! let mut frames = parse_frames(trace).collect_warnings();
//!
//! assert_eq!(frames.by_ref().count(), 1);
//! let warnings = frames.take_warnings();
//! assert_eq!(warnings.len(), 2);
//! assert!(matches!(warnings[0], Warning::SkippedLine { line_number: 1, .. }));
//! assert_eq!(warnings[1].kind(), "unrecognized_frame");
//! ```

use thiserror::Error;

/// A line that produced no frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A frame-shaped line that neither grammar accepted, such as a
    /// truncated frame.
    #[error("line {line_number}: unrecognized frame: {line}")]
    UnrecognizedFrame {
        /// The 1-based line number in the trace text.
        line_number: usize,
        /// The trimmed line text.
        line: String,
    },

    /// Any other non-blank line, such as an exception message.
    #[error("line {line_number}: skipped: {reason}")]
    SkippedLine {
        /// The 1-based line number in the trace text.
        line_number: usize,
        /// Why the line was skipped.
        reason: &'static str,
    },
}

impl Warning {
    /// The 1-based line the warning refers to.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match *self {
            Self::UnrecognizedFrame { line_number, .. } | Self::SkippedLine { line_number, .. } => {
                line_number
            }
        }
    }

    /// A stable identifier for the variant, used in machine-readable output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedFrame { .. } => "unrecognized_frame",
            Self::SkippedLine { .. } => "skipped_line",
        }
    }

    /// Returns `true` for [`Warning::UnrecognizedFrame`].
    #[must_use]
    pub fn is_unrecognized_frame(&self) -> bool {
        matches!(self, Self::UnrecognizedFrame { .. })
    }
}
