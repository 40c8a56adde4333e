//! Lazy frame extraction over a whole stack trace.
//!
//! [`parse`] walks the trace line by line and hands every recognized frame to
//! a caller-supplied builder. Nothing is parsed until the returned
//! [`Frames`] iterator is advanced, so taking the first few frames of a very
//! long trace only scans as far as needed. Calling [`parse`] again re-scans
//! from the start.

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::str::Lines;

use crate::frame::{Frame, FrameParts};
use crate::grammar::{looks_like_frame, match_line};
use crate::warning::Warning;

/// Iterator over the frames of a stack trace.
///
/// Created by [`parse`] and [`parse_frames`]. Each item is whatever the
/// builder returns for one recognized frame line, in input order. Lines that
/// match no grammar are skipped without shifting later frames.
#[derive(Clone)]
pub struct Frames<'a, F> {
    lines: Enumerate<Lines<'a>>,
    builder: F,
    warnings: Option<Vec<Warning>>,
    yielded: usize,
    exhausted: bool,
}

/// The iterator returned by [`parse_frames`].
pub type OwnedFrames<'a> = Frames<'a, fn(FrameParts<'a>) -> Frame>;

/// Parses a stack trace, building one result per frame line.
///
/// The builder receives the extracted [`FrameParts`], all borrowed from
/// `text`, and may turn them into any type.
///
/// # Examples
///
/// ```
/// use framescan::parse;
///
/// let trace = "\
/// System.InvalidOperationException: Sequence contains no elements
///    at System.Linq.Enumerable.First(IEnumerable`1 source)
///    at App.Orders.Latest(Int32 customerId) in C:\\src\\Orders.cs:line 18";
///
/// let methods: Vec<String> = parse(trace, |f| format!("{}::{}", f.type_name, f.method_name)).collect();
/// assert_eq!(methods, ["System.Linq.Enumerable::First", "App.Orders::Latest"]);
/// ```
#[must_use]
pub fn parse<'a, F, R>(text: &'a str, builder: F) -> Frames<'a, F>
where
    F: FnMut(FrameParts<'a>) -> R,
{
    Frames {
        lines: text.lines().enumerate(),
        builder,
        warnings: None,
        yielded: 0,
        exhausted: false,
    }
}

/// Parses a stack trace into owned [`Frame`] records.
#[must_use]
pub fn parse_frames<'a>(text: &'a str) -> OwnedFrames<'a> {
    let builder: fn(FrameParts<'a>) -> Frame = Frame::from_parts;
    parse(text, builder)
}

impl<F> Frames<'_, F> {
    /// Keeps a [`Warning`] for every non-blank line the iterator skips.
    ///
    /// Warnings belong to this iterator. A clone carries a copy of the
    /// warnings recorded so far and records its own from then on.
    #[must_use]
    pub fn collect_warnings(mut self) -> Self {
        self.warnings.get_or_insert_with(Vec::new);
        self
    }

    /// Warnings recorded so far, empty unless [`collect_warnings`] was used.
    ///
    /// [`collect_warnings`]: Frames::collect_warnings
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        self.warnings.as_deref().unwrap_or_default()
    }

    /// Moves the recorded warnings out, leaving collection enabled.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        self.warnings.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Returns the number of frames produced so far.
    #[must_use]
    pub fn frames_yielded(&self) -> usize {
        self.yielded
    }
}

fn classify_skip(line_number: usize, line: &str) -> Option<Warning> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if looks_like_frame(trimmed) {
        Some(Warning::UnrecognizedFrame {
            line_number,
            line: trimmed.to_string(),
        })
    } else {
        Some(Warning::SkippedLine {
            line_number,
            reason: "not a stack frame",
        })
    }
}

impl<'a, F, R> Iterator for Frames<'a, F>
where
    F: FnMut(FrameParts<'a>) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for (idx, line) in self.lines.by_ref() {
            if let Some(parts) = match_line(line) {
                self.yielded += 1;
                return Some((self.builder)(parts));
            }
            tracing::trace!(line_number = idx + 1, "skipping line");
            if let Some(warnings) = self.warnings.as_mut() {
                warnings.extend(classify_skip(idx + 1, line));
            }
        }

        if !self.exhausted {
            self.exhausted = true;
            tracing::debug!(frames = self.yielded, "stack trace exhausted");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.lines.size_hint().1)
    }
}

impl<'a, F, R> FusedIterator for Frames<'a, F> where F: FnMut(FrameParts<'a>) -> R {}

impl<F> fmt::Debug for Frames<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frames")
            .field("yielded", &self.yielded)
            .field("exhausted", &self.exhausted)
            .field("collects_warnings", &self.warnings.is_some())
            .finish_non_exhaustive()
    }
}
