//! Reply processor — runs an email through classify → extract → compose.
//!
//! Flow:
//! 1. Classifier (skipped when the caller forces a category)
//! 2. Extractor → sender + topic
//! 3. Composer → filled template
//!
//! Nothing here fails: degenerate input still yields a reply built from the
//! fallback sender, topic and Unknown template.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{DEFAULT_SIGNATURE, ReplyConfig};
use crate::error::Result;
use crate::pipeline::classifier::{Classifier, MatchRule};
use crate::pipeline::composer::Composer;
use crate::pipeline::extractor;
use crate::pipeline::types::ProcessedReply;
use crate::templates::{Category, TemplateStore};

/// Drafts replies for inbound emails.
#[derive(Debug, Clone)]
pub struct ReplyProcessor {
    store: Arc<TemplateStore>,
    classifier: Classifier,
    composer: Composer,
}

impl ReplyProcessor {
    /// Create a processor over `store`, signing replies with `signature`.
    pub fn new(store: Arc<TemplateStore>, signature: impl Into<String>) -> Self {
        Self {
            classifier: Classifier::new(Arc::clone(&store)),
            composer: Composer::new(Arc::clone(&store), signature),
            store,
        }
    }

    /// Build a processor from runtime configuration, loading the template
    /// file when one is configured.
    pub fn from_config(config: &ReplyConfig) -> Result<Self> {
        let store = match &config.templates_path {
            Some(path) => TemplateStore::load(path)?,
            None => TemplateStore::builtin(),
        };
        Ok(Self::new(Arc::new(store), config.signature.clone()))
    }

    /// The template table this processor drafts from.
    pub fn templates(&self) -> &TemplateStore {
        &self.store
    }

    /// Detect the category of `text`.
    pub fn classify(&self, text: &str) -> Category {
        let classification = self.classifier.explain(text);
        match &classification.rule {
            MatchRule::Keyword(keyword) => debug!(
                category = %classification.category,
                keyword = %keyword,
                "Classified by template keyword"
            ),
            MatchRule::Fallback(phrase) => debug!(
                category = %classification.category,
                phrase = %phrase,
                "Classified by fallback phrase"
            ),
            MatchRule::Default => debug!("No keyword matched, using Unknown"),
        }
        classification.category
    }

    /// Compose a reply to `text` with the template for `category`.
    pub fn compose(&self, text: &str, category: Category) -> String {
        self.composer.compose(text, category)
    }

    /// Draft a reply, classifying first unless `forced` names a category.
    pub fn process(&self, text: &str, forced: Option<Category>) -> ProcessedReply {
        let category = match forced {
            Some(category) => {
                debug!(category = %category, "Category forced by caller, skipping classification");
                category
            }
            None => self.classify(text),
        };

        let fields = extractor::extract(text);
        let reply = self.composer.compose_with(text, category, &fields);

        info!(
            category = %category,
            forced = forced.is_some(),
            sender = %fields.sender,
            topic = %fields.topic,
            "Drafted reply"
        );

        ProcessedReply {
            id: Uuid::new_v4(),
            category,
            forced: forced.is_some(),
            sender: fields.sender,
            topic: fields.topic,
            reply,
            processed_at: Utc::now(),
        }
    }

    /// Draft replies for several emails independently.
    pub fn process_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        forced: Option<Category>,
    ) -> Vec<ProcessedReply> {
        info!(count = texts.len(), "Drafting reply batch");
        texts
            .iter()
            .map(|text| self.process(text.as_ref(), forced))
            .collect()
    }
}

impl Default for ReplyProcessor {
    fn default() -> Self {
        Self::new(Arc::new(TemplateStore::builtin()), DEFAULT_SIGNATURE)
    }
}
