//! Raw RFC 822 / MIME input → the plain text the pipeline reads.
//!
//! Output layout:
//! ```text
//! Subject: <subject>
//! From: <display name, or address>
//!
//! <body>
//! ```
//! Missing headers are left out so the extractor falls back naturally.

use mail_parser::MessageParser;

use crate::error::ChannelError;

/// Parse a raw message and flatten it for drafting.
pub fn flatten_message(raw: &[u8]) -> Result<String, ChannelError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(ChannelError::InvalidMessage("empty message".into()));
    }

    let parsed = MessageParser::default()
        .parse(raw)
        .ok_or_else(|| ChannelError::InvalidMessage("not an RFC 822 message".into()))?;

    let mut text = String::new();
    if let Some(subject) = parsed.subject() {
        text.push_str(&format!("Subject: {}\n", subject.trim()));
    }
    if let Some(sender) = extract_sender(&parsed) {
        text.push_str(&format!("From: {sender}\n"));
    }
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(extract_text(&parsed).trim());

    Ok(text)
}

/// Display name of the first `From` address, else the address itself.
fn extract_sender(parsed: &mail_parser::Message) -> Option<String> {
    let addr = parsed.from().and_then(|addr| addr.first())?;
    addr.name()
        .or_else(|| addr.address())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Readable body: the text part, else the HTML part with tags removed.
fn extract_text(parsed: &mail_parser::Message) -> String {
    if let Some(text) = parsed.body_text(0) {
        return text.to_string();
    }
    if let Some(html) = parsed.body_html(0) {
        return strip_html(html.as_ref());
    }
    String::new()
}

/// Strip HTML tags, keeping text and line structure.
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
