//! A lazy parser for .NET and Mono stack trace text.
//!
//! [`parse`] turns a multi-line stack trace into an iterator of caller-built
//! records, one per recognized frame line. Both the Microsoft .NET layout
//! (`at Type.Method(Args) in File:line N`) and the Mono layout
//! (`at Type.Method (Args) [0x0] in <filename unknown>:0`) are understood;
//! every other line is skipped.
//!
//! ```
//! use framescan::parse_frames;
//!
//! let trace = r"
//! System.Web.HttpException: The controller was not found.
//!    at Elmah.ErrorLogPageFactory.FindHandler(String name) in C:\ELMAH\src\Elmah\ErrorLogPageFactory.cs:line 126
//!    at System.Web.HttpApplication.ExecuteStep(IExecutionStep step, Boolean& completedSynchronously)";
//!
//! let frames: Vec<_> = parse_frames(trace).collect();
//! assert_eq!(frames.len(), 2);
//! assert_eq!(frames[0].method_name, "FindHandler");
//! assert_eq!(frames[1].parameters[1].type_name, "Boolean&");
//! assert!(frames[1].file.is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod frame;
pub mod grammar;
pub mod member;
pub mod params;
pub mod parser;
pub mod warning;

pub use error::{Error, Result};
pub use frame::{Frame, FrameParts, Grammar, OwnedParameter, Parameter};
pub use parser::{Frames, OwnedFrames, parse, parse_frames};
