//! CLI value enums and their conversions to output types.

use clap::ValueEnum;

use crate::output::OutputMode;

/// Output format for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Numbered, optionally colored text
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl From<FormatArg> for OutputMode {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputMode::Text,
            FormatArg::Json => OutputMode::Json,
        }
    }
}
