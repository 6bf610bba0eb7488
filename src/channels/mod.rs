//! Input channels — where email text comes from.
//!
//! Emails arrive as files or on stdin, either as plain pasted text or as a
//! raw RFC 822 message that gets flattened first.

pub mod mime;

use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::error::ChannelError;

/// How the input bytes should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Pasted email text, used as-is.
    #[default]
    Plain,
    /// Raw RFC 822 / MIME message.
    Mime,
}

/// Read one email from `path`, or from stdin when `path` is `None` or `-`.
pub async fn read_email(path: Option<&Path>, format: InputFormat) -> Result<String, ChannelError> {
    let raw = match path {
        Some(p) if p.as_os_str() != "-" => tokio::fs::read(p).await?,
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin().read_to_end(&mut buf).await?;
            buf
        }
    };

    debug!(
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "stdin".into()),
        bytes = raw.len(),
        ?format,
        "Read email input"
    );

    decode(&raw, format)
}

/// Turn raw input bytes into pipeline text.
pub fn decode(raw: &[u8], format: InputFormat) -> Result<String, ChannelError> {
    match format {
        InputFormat::Plain => Ok(String::from_utf8_lossy(raw).into_owned()),
        InputFormat::Mime => mime::flatten_message(raw),
    }
}
