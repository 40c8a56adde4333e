//! Parameter-list splitting.
//!
//! Splits the text between a frame's outer parentheses into `(type, name)`
//! pairs. Commas nested inside generic or array brackets do not separate
//! parameters, so `Dictionary<String, Int32> map` stays one pair.

use crate::frame::Parameter;

/// Splits the inner text of a parameter list into parameters.
///
/// Each top-level segment is trimmed and split on its last whitespace run
/// outside brackets: the type token keeps any embedded spaces and `&`/`*`
/// suffixes, the name token is the final word. A segment with no such
/// whitespace, like `Func<String, Int32>`, becomes a type with an empty name.
/// Blank input yields no parameters.
///
/// # Examples
///
/// ```
/// use framescan::params::split_parameters;
///
/// let params = split_parameters("IExecutionStep step, Boolean& completedSynchronously");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[1].type_name, "Boolean&");
/// assert_eq!(params[1].name, "completedSynchronously");
/// ```
#[must_use]
pub fn split_parameters(inner: &str) -> Vec<Parameter<'_>> {
    if inner.trim().is_empty() {
        return Vec::new();
    }

    top_level_segments(inner)
        .map(|segment| split_segment(segment.trim()))
        .collect()
}

/// Counts the comma-separated segments at bracket depth zero.
#[must_use]
pub fn count_top_level_segments(inner: &str) -> usize {
    if inner.trim().is_empty() {
        0
    } else {
        top_level_segments(inner).count()
    }
}

fn top_level_segments(inner: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut done = false;
    let mut chars = inner.char_indices();

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        for (idx, ch) in chars.by_ref() {
            match ch {
                '<' | '[' | '(' | '{' => depth += 1,
                '>' | ']' | ')' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    let segment = &inner[start..idx];
                    start = idx + ch.len_utf8();
                    return Some(segment);
                }
                _ => {}
            }
        }
        done = true;
        Some(&inner[start..])
    })
}

fn split_segment(segment: &str) -> Parameter<'_> {
    let mut depth = 0usize;
    let mut boundary = None;
    for (idx, ch) in segment.char_indices() {
        match ch {
            '<' | '[' | '(' | '{' => depth += 1,
            '>' | ']' | ')' | '}' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => boundary = Some(idx),
            _ => {}
        }
    }

    match boundary {
        Some(idx) => Parameter {
            type_name: segment[..idx].trim_end(),
            name: segment[idx..].trim_start(),
        },
        None => Parameter {
            type_name: segment,
            name: "",
        },
    }
}
