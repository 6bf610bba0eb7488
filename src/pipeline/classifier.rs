//! Keyword classifier.
//!
//! Checks the lower-cased email against each template's keyword list in
//! table order, then a short ladder of fallback phrases. First hit wins:
//! - template keywords, in table order (Unknown skipped)
//! - "meet" / "schedule" / "availability" → Meeting Request
//! - "thank" / "appreciate" → Thank You
//! - "issue" / "problem" / "not working" → Support Request
//! - otherwise Unknown

use std::sync::Arc;

use crate::templates::{Category, TemplateStore};

/// Phrases consulted only after every template keyword list missed.
const FALLBACK_RULES: &[(Category, &[&str])] = &[
    (Category::MeetingRequest, &["meet", "schedule", "availability"]),
    (Category::ThankYou, &["thank", "appreciate"]),
    (Category::SupportRequest, &["issue", "problem", "not working"]),
];

/// Which rule produced a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// A template keyword matched.
    Keyword(String),
    /// A fallback phrase matched.
    Fallback(&'static str),
    /// Nothing matched.
    Default,
}

/// Classification result with the rule that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub rule: MatchRule,
}

/// Classifies email text against a template table.
#[derive(Debug, Clone)]
pub struct Classifier {
    store: Arc<TemplateStore>,
}

impl Classifier {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        Self { store }
    }

    /// Category for `text`.
    pub fn classify(&self, text: &str) -> Category {
        self.explain(text).category
    }

    /// Category for `text`, plus the keyword or phrase that selected it.
    pub fn explain(&self, text: &str) -> Classification {
        let content = text.to_lowercase();

        for (category, template) in self.store.iter() {
            if category == Category::Unknown {
                continue;
            }
            if let Some(keyword) = template.keywords.iter().find(|k| content.contains(k.as_str())) {
                return Classification {
                    category,
                    rule: MatchRule::Keyword(keyword.clone()),
                };
            }
        }

        for &(category, phrases) in FALLBACK_RULES {
            if let Some(phrase) = phrases.iter().copied().find(|p| content.contains(*p)) {
                return Classification {
                    category,
                    rule: MatchRule::Fallback(phrase),
                };
            }
        }

        Classification {
            category: Category::Unknown,
            rule: MatchRule::Default,
        }
    }
}
