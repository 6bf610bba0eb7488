//! Reply templates — the category set and the ordered template table.
//!
//! The table is built once at startup and shared read-only. Its order is
//! the classification priority: when several keyword lists match, the
//! category listed first wins.

mod builtin;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TemplateError;

/// Classification label assigned to an inbound email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Inquiry,
    #[serde(rename = "Meeting Request")]
    MeetingRequest,
    #[serde(rename = "Follow Up")]
    FollowUp,
    #[serde(rename = "Thank You")]
    ThankYou,
    Complaint,
    #[serde(rename = "Support Request")]
    SupportRequest,
    Introduction,
    Feedback,
    Unknown,
}

impl Category {
    /// Every category, in built-in table order.
    pub const ALL: [Category; 9] = [
        Self::Inquiry,
        Self::MeetingRequest,
        Self::FollowUp,
        Self::ThankYou,
        Self::Complaint,
        Self::SupportRequest,
        Self::Introduction,
        Self::Feedback,
        Self::Unknown,
    ];

    /// Human-readable label, also used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inquiry => "Inquiry",
            Self::MeetingRequest => "Meeting Request",
            Self::FollowUp => "Follow Up",
            Self::ThankYou => "Thank You",
            Self::Complaint => "Complaint",
            Self::SupportRequest => "Support Request",
            Self::Introduction => "Introduction",
            Self::Feedback => "Feedback",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TemplateError;

    /// Accepts labels case-insensitively, with words separated by spaces,
    /// underscores or hyphens (`meeting_request`, `Follow-Up`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == normalized)
            .ok_or_else(|| TemplateError::UnknownCategory(s.to_string()))
    }
}

/// A reply skeleton plus the phrases that select it.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    /// What kind of email this template answers.
    pub description: String,
    /// Body text with `{name}` placeholders.
    pub body: String,
    /// Lowercase trigger phrases, matched as substrings.
    pub keywords: Vec<String>,
}

/// Listing view of a template, without its body.
#[derive(Debug, Serialize)]
pub struct TemplateSummary<'a> {
    pub category: Category,
    pub description: &'a str,
    pub keywords: &'a [String],
}

/// One entry of a JSON template file.
#[derive(Debug, Deserialize)]
struct TemplateFileEntry {
    category: String,
    description: String,
    body: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Ordered table of one template per category.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    entries: Vec<(Category, Template)>,
    /// Index of the Unknown entry.
    fallback: usize,
}

impl TemplateStore {
    /// The built-in table covering all nine categories.
    pub fn builtin() -> Self {
        let entries = builtin::entries();
        // Unknown is the last built-in row
        let fallback = entries.len() - 1;
        Self { entries, fallback }
    }

    /// Build a store from ordered entries.
    ///
    /// Keywords are lower-cased. Each category may appear at most once, and
    /// an Unknown entry is required so lookups always have a fallback.
    pub fn from_entries(entries: Vec<(Category, Template)>) -> Result<Self, TemplateError> {
        let mut fallback = None;
        let mut normalized = Vec::with_capacity(entries.len());

        for (index, (category, mut template)) in entries.into_iter().enumerate() {
            if normalized.iter().any(|(c, _)| *c == category) {
                return Err(TemplateError::DuplicateCategory(category.to_string()));
            }
            if category == Category::Unknown {
                fallback = Some(index);
            }
            template.keywords = template
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            normalized.push((category, template));
        }

        let fallback = fallback.ok_or(TemplateError::MissingFallback)?;
        Ok(Self {
            entries: normalized,
            fallback,
        })
    }

    /// Parse a JSON array of `{category, description, body, keywords}`.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let raw: Vec<TemplateFileEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|e| {
                let category = e.category.parse::<Category>()?;
                Ok((
                    category,
                    Template {
                        description: e.description,
                        body: e.body,
                        keywords: e.keywords,
                    },
                ))
            })
            .collect::<Result<Vec<_>, TemplateError>>()?;
        Self::from_entries(entries)
    }

    /// Load a JSON template table from disk.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        debug!(path = %path.display(), templates = store.len(), "Loaded template table");
        Ok(store)
    }

    /// Template for `category`, if the table defines one.
    pub fn get(&self, category: Category) -> Option<&Template> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, t)| t)
    }

    /// Template for `category`, or the Unknown template when absent.
    pub fn get_or_fallback(&self, category: Category) -> &Template {
        self.get(category)
            .unwrap_or(&self.entries[self.fallback].1)
    }

    /// Entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Template)> {
        self.entries.iter().map(|(c, t)| (*c, t))
    }

    /// Category, description and keywords of each entry, in priority order.
    pub fn summaries(&self) -> Vec<TemplateSummary<'_>> {
        self.iter()
            .map(|(category, t)| TemplateSummary {
                category,
                description: &t.description,
                keywords: &t.keywords,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::builtin()
    }
}
