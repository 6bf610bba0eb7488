//! Reply composer — fills a category template from the extracted fields.
//!
//! Every substitution replaces only the FIRST occurrence of its token, in
//! the order `{sender}`, `{topic}`, `{yourName}`, then the category
//! specific placeholders. A token repeated in a template keeps its later
//! occurrences.

use std::sync::Arc;

use crate::pipeline::extractor::{self, ExtractedFields};
use crate::pipeline::responses::generate_response;
use crate::templates::{Category, TemplateStore};

const MEETING_AVAILABILITY: &str =
    "I am available this Thursday at 2:00 PM or Friday at 10:00 AM (Eastern Time).";

const FOLLOW_UP_STATUS: &str =
    "We have made significant progress on the project since our last communication.";

const THANK_YOU_ACTION: &str = "assist you with your request";

const THANK_YOU_COMMENTS: &str =
    "Your satisfaction is important to us, and I'm glad we were able to meet your expectations.";

const COMPLAINT_RESOLUTION: &str = "I have escalated this issue to our senior management team. We will be conducting a thorough investigation and will get back to you within 24 hours with a resolution.";

const INTRODUCTION_COLLABORATION: &str = "working together in the future";

/// Builds reply text from a template table.
#[derive(Debug, Clone)]
pub struct Composer {
    store: Arc<TemplateStore>,
    signature: String,
}

impl Composer {
    /// `signature` fills the `{yourName}` placeholder.
    pub fn new(store: Arc<TemplateStore>, signature: impl Into<String>) -> Self {
        Self {
            store,
            signature: signature.into(),
        }
    }

    /// Compose a reply to `text` using the template for `category`.
    pub fn compose(&self, text: &str, category: Category) -> String {
        let fields = extractor::extract(text);
        self.compose_with(text, category, &fields)
    }

    /// Compose with fields the caller already extracted.
    pub fn compose_with(&self, text: &str, category: Category, fields: &ExtractedFields) -> String {
        let template = self.store.get_or_fallback(category);
        let response = generate_response(text, category);

        let mut reply = template
            .body
            .replacen("{sender}", &fields.sender, 1)
            .replacen("{topic}", &fields.topic, 1)
            .replacen("{yourName}", &self.signature, 1);

        for (token, value) in category_placeholders(category, &fields.topic, response) {
            reply = reply.replacen(token, value, 1);
        }

        reply
    }
}

/// Category specific placeholder → value pairs, applied in order.
fn category_placeholders<'a>(
    category: Category,
    topic: &'a str,
    response: &'a str,
) -> Vec<(&'static str, &'a str)> {
    match category {
        Category::MeetingRequest => vec![("{acceptanceOrAlternative}", MEETING_AVAILABILITY)],
        Category::FollowUp => vec![("{statusUpdate}", FOLLOW_UP_STATUS)],
        Category::ThankYou => vec![
            ("{action}", THANK_YOU_ACTION),
            ("{additionalComments}", THANK_YOU_COMMENTS),
        ],
        Category::Complaint => vec![
            ("{issue}", topic),
            ("{resolutionSteps}", COMPLAINT_RESOLUTION),
        ],
        Category::SupportRequest => vec![
            ("{issue}", topic),
            ("{troubleshootingSteps}", response),
        ],
        Category::Introduction => vec![
            ("{responseToIntroduction}", response),
            ("{potentialCollaboration}", INTRODUCTION_COLLABORATION),
        ],
        Category::Feedback => vec![("{responseToFeedback}", response)],
        Category::Inquiry | Category::Unknown => vec![("{customResponse}", response)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SIGNATURE;
    use crate::templates::Template;

    fn composer() -> Composer {
        Composer::new(Arc::new(TemplateStore::builtin()), DEFAULT_SIGNATURE)
    }

    const EMAIL: &str = "Subject: Q3 rollout\nHello, writing about the rollout.\n\nRegards,\nMaya Chen";

    #[test]
    fn no_placeholder_left_for_any_category() {
        let composer = composer();
        for category in Category::ALL {
            let reply = composer.compose(EMAIL, category);
            assert!(
                !reply.contains('{') && !reply.contains('}'),
                "{category} left a placeholder:\n{reply}"
            );
            assert!(reply.starts_with("Dear Maya Chen,"), "{category}: {reply}");
        }
    }

    #[test]
    fn empty_input_degrades_to_fallbacks() {
        let reply = composer().compose("", Category::Unknown);
        assert!(reply.starts_with("Dear Sender,"));
        assert!(reply.contains("regarding your recent email."));
        assert!(reply.ends_with("Your Name"));
    }

    #[test]
    fn complaint_uses_topic_and_fixed_resolution() {
        let reply = composer().compose(EMAIL, Category::Complaint);
        assert!(reply.contains("regarding Q3 rollout."));
        assert!(reply.contains(COMPLAINT_RESOLUTION));
        // the generated paragraph is not used for complaints
        assert!(!reply.contains(generate_response(EMAIL, Category::Complaint)));
        assert!(reply.ends_with("Sincerely,\nYour Name"));
    }

    #[test]
    fn meeting_request_uses_fixed_availability() {
        let reply = composer().compose(EMAIL, Category::MeetingRequest);
        assert!(reply.contains(&format!("I would be happy to meet with you. {MEETING_AVAILABILITY}")));
        assert!(!reply.contains("Alternatively"));
    }

    #[test]
    fn thank_you_fills_action_and_comments() {
        let reply = composer().compose(EMAIL, Category::ThankYou);
        assert!(reply.contains("It was my pleasure to assist you with your request."));
        assert!(reply.contains(THANK_YOU_COMMENTS));
    }

    #[test]
    fn support_request_uses_generated_steps() {
        let reply = composer().compose(EMAIL, Category::SupportRequest);
        assert!(reply.contains("support team about Q3 rollout."));
        assert!(reply.contains(generate_response(EMAIL, Category::SupportRequest)));
        assert!(reply.ends_with("Your Name\nSupport Team"));
    }

    #[test]
    fn introduction_and_feedback_use_generated_paragraph() {
        let composer = composer();
        let intro = composer.compose(EMAIL, Category::Introduction);
        assert!(intro.contains(generate_response(EMAIL, Category::Introduction)));
        assert!(intro.contains("possibility of working together in the future."));

        let feedback = composer.compose(EMAIL, Category::Feedback);
        assert!(feedback.contains(generate_response(EMAIL, Category::Feedback)));
    }

    #[test]
    fn signature_is_configurable() {
        let composer = Composer::new(Arc::new(TemplateStore::builtin()), "Sam Ortiz");
        let reply = composer.compose(EMAIL, Category::Inquiry);
        assert!(reply.ends_with("Best regards,\nSam Ortiz"));
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let store = TemplateStore::from_entries(vec![(
            Category::Unknown,
            Template {
                description: String::new(),
                body: "{sender} and {sender}; {customResponse} {customResponse}".into(),
                keywords: vec![],
            },
        )])
        .unwrap();
        let composer = Composer::new(Arc::new(store), DEFAULT_SIGNATURE);
        let reply = composer.compose("Regards, Lena", Category::Unknown);
        let response = generate_response("", Category::Unknown);
        assert_eq!(reply, format!("Lena and {{sender}}; {response} {{customResponse}}"));
    }

    #[test]
    fn missing_template_falls_back_to_unknown_body() {
        let store = TemplateStore::from_entries(vec![(
            Category::Unknown,
            Template {
                description: String::new(),
                body: "Hi {sender}: {customResponse}".into(),
                keywords: vec![],
            },
        )])
        .unwrap();
        let composer = Composer::new(Arc::new(store), DEFAULT_SIGNATURE);
        // Feedback fills {responseToFeedback}, which the fallback body lacks
        let reply = composer.compose("Regards, Lena", Category::Feedback);
        assert_eq!(reply, "Hi Lena: {customResponse}");
    }
}
