//! Line grammars for stack frame text.
//!
//! Two grammars are recognized, tried in order:
//!
//! - **Standard** (.NET):
//!   `at Type.Method(Type name, ...) in C:\path\File.cs:line 42`, where the
//!   location clause is optional.
//! - **Alternate** (Mono):
//!   `at Type.Method (Type name, ...) [0x00000] in <filename unknown>:0`,
//!   with a space before the parameter list, an IL offset that is discarded,
//!   and a mandatory location clause.
//!
//! The `at`, `in` and `line` keywords are each matched as any single word.
//! Localized runtimes translate all three, so a German trace reads
//! `bei Type.Method() in File.cs:Zeile 42` and a French one
//! `à Type.Method() dans File.cs:ligne 42`.
//!
//! Each matcher is a pure function from one line to an optional
//! [`FrameParts`]; [`match_line`] combines them.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::frame::{FrameParts, Grammar};
use crate::member::split_member;
use crate::params::split_parameters;

static STANDARD_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*\w+\s+
        (?P<frame>
            (?P<member>[^\s(]+)
            (?P<params>\((?P<args>.*)\))
            (?:\s+\w+\s+(?P<file>.+):\w+\s+(?P<line>[0-9]+))?
        )
        \s*$",
    )
    .expect("standard frame pattern is valid")
});

static ALTERNATE_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*\w+\s+
        (?P<frame>
            (?P<member>[^\s(]+)
            \s+
            (?P<params>\((?P<args>.*)\))
            \s+\[0x[0-9a-fA-F]+\]
            \s+\w+\s+
            (?:<(?P<unknown>[^>]*)>|(?P<file>.+))
            :(?P<line>[0-9]+)
        )
        \s*$",
    )
    .expect("alternate frame pattern is valid")
});

static FRAME_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\w+\s+[^\s(]*\.[^\s(]*\s*\(").expect("frame-like pattern is valid")
});

/// Matches one line against the grammars in priority order.
///
/// # Examples
///
/// ```
/// use framescan::grammar::match_line;
/// use framescan::Grammar;
///
/// let frame = match_line("   at Elmah.ErrorLogPageFactory.FindHandler(String name)").unwrap();
/// assert_eq!(frame.grammar, Grammar::Standard);
/// assert_eq!(frame.method_name, "FindHandler");
/// assert!(frame.file.is_none());
///
/// assert!(match_line("System.Exception: boom").is_none());
/// ```
#[must_use]
pub fn match_line(line: &str) -> Option<FrameParts<'_>> {
    match_standard(line).or_else(|| match_alternate(line))
}

/// Matches a .NET-style frame line.
#[must_use]
pub fn match_standard(line: &str) -> Option<FrameParts<'_>> {
    let caps = STANDARD_FRAME.captures(line)?;
    let file = caps.name("file").map(|m| m.as_str());
    build(&caps, Grammar::Standard, file)
}

/// Matches a Mono-style frame line.
///
/// A file written in angle brackets, such as `<filename unknown>`, is
/// reported without the brackets.
#[must_use]
pub fn match_alternate(line: &str) -> Option<FrameParts<'_>> {
    let caps = ALTERNATE_FRAME.captures(line)?;
    let file = caps
        .name("unknown")
        .or_else(|| caps.name("file"))
        .map(|m| m.as_str());
    build(&caps, Grammar::Alternate, file)
}

/// Returns `true` for lines shaped like a frame: a keyword, then a dotted
/// member token, then an opening parenthesis.
///
/// Used to tell frame lines the grammars rejected apart from message and
/// separator lines, which are expected to be skipped. Prose such as
/// `at least one error occurred.` is not frame-like.
#[must_use]
pub fn looks_like_frame(line: &str) -> bool {
    FRAME_LIKE.is_match(line)
}

fn build<'a>(
    caps: &Captures<'a>,
    grammar: Grammar,
    file: Option<&'a str>,
) -> Option<FrameParts<'a>> {
    let (type_name, method_name) = split_member(caps.name("member")?.as_str())?;
    let args = caps.name("args").map_or("", |m| m.as_str());

    Some(FrameParts {
        text: caps.name("frame")?.as_str().trim(),
        type_name,
        method_name,
        parameter_list: caps.name("params")?.as_str(),
        parameters: split_parameters(args),
        file,
        line: caps.name("line").map(|m| m.as_str()),
        grammar,
    })
}
