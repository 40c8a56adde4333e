//! Framescan CLI - read a .NET or Mono stack trace and print its frames.
//!
//! The binary is a thin layer over the `framescan` library: it resolves
//! configuration, reads the trace from a file or stdin, and formats the
//! extracted frames as text or JSON.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
