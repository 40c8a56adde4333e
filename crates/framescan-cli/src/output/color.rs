//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Reference: cyan   (declaring type names)
//!   - Emphasis:  bold   (method names)
//!   - Index:     yellow (frame numbers)
//!   - Muted:     dimmed (parameter lists, source locations)
//!   - Warning:   yellow (skipped line reports)

use colored::Colorize;

use super::OutputConfig;

/// Colorize a declaring type name (cyan).
pub(crate) fn type_name(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Emphasize a method name (bold).
pub(crate) fn method_name(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Colorize a frame index such as `#3` (yellow).
pub(crate) fn frame_index(index: usize, config: &OutputConfig) -> String {
    let text = format!("#{index}");
    if !config.use_colors {
        return text;
    }
    text.yellow().to_string()
}

/// Apply muted styling (dimmed) to text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}
