//! Reading stack trace text from a file or stdin.

use crate::error::{Error, Result};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

/// Read the whole trace. `None` or `-` reads stdin.
pub async fn read_trace(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .await
                .map_err(|source| Error::ReadInput {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "read stack trace file");
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            tracing::debug!(bytes = text.len(), "read stack trace from stdin");
            Ok(text)
        }
    }
}
