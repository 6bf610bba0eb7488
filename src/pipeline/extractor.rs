//! Sender and topic extraction from free-form email text.
//!
//! Pure regex heuristics. Every function here is total: when a pattern is
//! absent, or captures only whitespace, the next rule (and finally a fixed
//! fallback) is used, so the result is never empty.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Sender used when no signature or `From:` line is found.
pub const FALLBACK_SENDER: &str = "Sender";

/// Topic used when there is no subject line and no usable first sentence.
pub const FALLBACK_TOPIC: &str = "your recent email";

/// Closing salutation followed by a run of letters/whitespace (the name).
static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:regards|sincerely|best|thanks),?\s*([A-Za-z\s]+)").unwrap()
});

/// `From:` header style line.
static FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)from:\s*([A-Za-z\s]+)").unwrap());

/// `Subject:` line.
static SUBJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)subject:\s*([^\n]+)").unwrap());

/// Sentence-ending punctuation: followed by whitespace or end of text, so
/// `v2.1` or `acme.com` do not end a sentence.
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?](?:\s|$)").unwrap());

/// Exclusive bounds on the trimmed length of a first-sentence topic.
const MIN_SENTENCE_TOPIC_CHARS: usize = 10;
const MAX_SENTENCE_TOPIC_CHARS: usize = 100;

/// Values pulled out of an email for template substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub sender: String,
    pub topic: String,
}

/// Extract both sender and topic.
pub fn extract(text: &str) -> ExtractedFields {
    ExtractedFields {
        sender: extract_sender(text),
        topic: extract_topic(text),
    }
}

/// Sender name from the signature, else a `From:` line, else `"Sender"`.
pub fn extract_sender(text: &str) -> String {
    first_capture(&SIGNATURE_RE, text)
        .or_else(|| first_capture(&FROM_RE, text))
        .unwrap_or_else(|| FALLBACK_SENDER.to_string())
}

/// Topic from the `Subject:` line, else the first sentence when it is a
/// reasonable length, else `"your recent email"`.
pub fn extract_topic(text: &str) -> String {
    if let Some(subject) = first_capture(&SUBJECT_RE, text) {
        return subject;
    }

    let first_sentence = match SENTENCE_END_RE.find(text) {
        Some(end) => &text[..end.start()],
        None => text,
    };
    let candidate = first_sentence.trim();
    let len = candidate.chars().count();
    if len > MIN_SENTENCE_TOPIC_CHARS && len < MAX_SENTENCE_TOPIC_CHARS {
        return candidate.to_string();
    }

    FALLBACK_TOPIC.to_string()
}

/// First capture group of `re` that is non-empty after trimming.
fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
