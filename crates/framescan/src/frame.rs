//! Frame records produced by the parser.
//!
//! [`FrameParts`] borrows every field from the input text and is what the
//! parser hands to a builder. [`Frame`] is the owned, serializable form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, parse_line_number};

/// The runtime convention a frame line was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    /// `at Type.Method(Args) in File:line N` as printed by the .NET runtime.
    Standard,
    /// `at Type.Method (Args) [0x0] in <filename unknown>:0` as printed by Mono.
    Alternate,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

/// One `(type, name)` pair from a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    /// Everything before the last whitespace run, e.g. `Boolean&`.
    pub type_name: &'a str,
    /// The trailing identifier. Empty when the segment had no whitespace.
    pub name: &'a str,
}

impl fmt::Display for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{} {}", self.type_name, self.name)
        }
    }
}

/// The fields of one recognized frame line, borrowed from the trace text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameParts<'a> {
    /// The matched frame text after the leading keyword, trimmed.
    pub text: &'a str,
    /// Declaring type, including namespace, nested and interface qualifiers.
    pub type_name: &'a str,
    /// The final member segment before the parameter list.
    pub method_name: &'a str,
    /// The parameter list including its parentheses.
    pub parameter_list: &'a str,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter<'a>>,
    /// Source file, or the sentinel text for Mono's `<filename unknown>`.
    pub file: Option<&'a str>,
    /// Source line as written in the trace.
    pub line: Option<&'a str>,
    /// Which grammar recognized the line.
    pub grammar: Grammar,
}

impl FrameParts<'_> {
    /// Returns the line as a number, if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLineNumber`](crate::Error::InvalidLineNumber)
    /// when the digits do not fit in a `u32`.
    pub fn line_number(&self) -> Result<Option<u32>> {
        parse_line_number(self.line)
    }

    /// Returns the parameters joined as `Type name, Type name`.
    #[must_use]
    pub fn parameters_text(&self) -> String {
        join_parameters(self.parameters.iter().map(ToString::to_string))
    }
}

/// An owned `(type, name)` parameter pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedParameter {
    /// Parameter type token.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Parameter name token.
    pub name: String,
}

impl From<Parameter<'_>> for OwnedParameter {
    fn from(parameter: Parameter<'_>) -> Self {
        Self {
            type_name: parameter.type_name.to_string(),
            name: parameter.name.to_string(),
        }
    }
}

/// An owned frame record.
///
/// # Examples
///
/// ```
/// use framescan::{parse, Frame};
///
/// let trace = "   at App.Program.Main(String[] args) in C:\\src\\Program.cs:line 12";
/// let frames: Vec<Frame> = parse(trace, Frame::from_parts).collect();
///
/// assert_eq!(frames[0].type_name, "App.Program");
/// assert_eq!(frames[0].method_name, "Main");
/// assert_eq!(frames[0].line.as_deref(), Some("12"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// The matched frame text.
    pub text: String,
    /// Declaring type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Method name.
    #[serde(rename = "method")]
    pub method_name: String,
    /// Parameter list including parentheses.
    pub parameter_list: String,
    /// Parameter pairs in declaration order.
    pub parameters: Vec<OwnedParameter>,
    /// Source file, if present.
    pub file: Option<String>,
    /// Source line text, if present.
    pub line: Option<String>,
    /// Grammar that recognized the line.
    pub grammar: Grammar,
}

impl Frame {
    /// Builds an owned frame. Usable directly as a builder for [`crate::parse`].
    #[must_use]
    pub fn from_parts(parts: FrameParts<'_>) -> Self {
        Self {
            text: parts.text.to_string(),
            type_name: parts.type_name.to_string(),
            method_name: parts.method_name.to_string(),
            parameter_list: parts.parameter_list.to_string(),
            parameters: parts.parameters.into_iter().map(Into::into).collect(),
            file: parts.file.map(str::to_string),
            line: parts.line.map(str::to_string),
            grammar: parts.grammar,
        }
    }

    /// Returns the line as a number, if one is present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLineNumber`](crate::Error::InvalidLineNumber)
    /// when the digits do not fit in a `u32`.
    pub fn line_number(&self) -> Result<Option<u32>> {
        parse_line_number(self.line.as_deref())
    }

    /// Returns `Type.Method(Args)`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!(
            "{}.{}{}",
            self.type_name, self.method_name, self.parameter_list
        )
    }

    /// Returns the parameters joined as `Type name, Type name`.
    #[must_use]
    pub fn parameters_text(&self) -> String {
        join_parameters(self.parameters.iter().map(|p| {
            if p.name.is_empty() {
                p.type_name.clone()
            } else {
                format!("{} {}", p.type_name, p.name)
            }
        }))
    }
}

impl From<FrameParts<'_>> for Frame {
    fn from(parts: FrameParts<'_>) -> Self {
        Self::from_parts(parts)
    }
}

fn join_parameters(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parts() -> FrameParts<'static> {
        FrameParts {
            text: "Elmah.ErrorLogPageFactory.FindHandler(String name) in C:\\x.cs:line 126",
            type_name: "Elmah.ErrorLogPageFactory",
            method_name: "FindHandler",
            parameter_list: "(String name)",
            parameters: vec![Parameter {
                type_name: "String",
                name: "name",
            }],
            file: Some("C:\\x.cs"),
            line: Some("126"),
            grammar: Grammar::Standard,
        }
    }

    #[test]
    fn from_parts_copies_every_field() {
        let frame = Frame::from_parts(sample_parts());

        assert_eq!(frame.type_name, "Elmah.ErrorLogPageFactory");
        assert_eq!(frame.method_name, "FindHandler");
        assert_eq!(frame.parameter_list, "(String name)");
        assert_eq!(
            frame.parameters,
            vec![OwnedParameter {
                type_name: "String".to_string(),
                name: "name".to_string(),
            }]
        );
        assert_eq!(frame.file.as_deref(), Some("C:\\x.cs"));
        assert_eq!(frame.line.as_deref(), Some("126"));
        assert_eq!(frame.grammar, Grammar::Standard);
    }

    #[test]
    fn signature_rebuilds_member_and_arguments() {
        let frame = Frame::from(sample_parts());
        assert_eq!(frame.signature(), "Elmah.ErrorLogPageFactory.FindHandler(String name)");
    }

    #[test]
    fn parameters_text_matches_between_forms() {
        let mut parts = sample_parts();
        parts.parameters.push(Parameter {
            type_name: "Boolean&",
            name: "done",
        });
        let owned = Frame::from_parts(parts.clone());

        assert_eq!(parts.parameters_text(), "String name, Boolean& done");
        assert_eq!(owned.parameters_text(), parts.parameters_text());
    }

    #[test]
    fn unnamed_parameter_displays_type_only() {
        let parameter = Parameter {
            type_name: "int",
            name: "",
        };
        assert_eq!(parameter.to_string(), "int");
    }

    #[test]
    fn line_number_parses_text() {
        assert_eq!(sample_parts().line_number().unwrap(), Some(126));
    }

    #[test]
    fn serializes_with_short_field_names() {
        let frame = Frame::from_parts(sample_parts());
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["type"], "Elmah.ErrorLogPageFactory");
        assert_eq!(json["method"], "FindHandler");
        assert_eq!(json["parameters"][0]["type"], "String");
        assert_eq!(json["grammar"], "standard");
    }

    #[test]
    fn grammar_display() {
        assert_eq!(Grammar::Standard.to_string(), "standard");
        assert_eq!(Grammar::Alternate.to_string(), "alternate");
    }
}
