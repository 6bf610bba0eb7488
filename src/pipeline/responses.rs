//! Canned response paragraphs, one per category.

use crate::templates::Category;

const INQUIRY: &str = "I've reviewed your inquiry and would like to provide you with the information you requested. Our team specializes in this area, and we're committed to providing comprehensive solutions tailored to your specific needs.";

const MEETING_REQUEST: &str = "I am available this Thursday at 2:00 PM or Friday at 10:00 AM (Eastern Time). Alternatively, I could arrange a meeting early next week if that would be more convenient for you.";

const FOLLOW_UP: &str = "We have made significant progress on the project since our last communication. The team has completed the initial phase and we are now moving forward with the next steps as outlined in our project plan.";

const THANK_YOU: &str = "It was my pleasure to assist you. Your satisfaction is important to us, and I'm glad we were able to meet your expectations.";

const COMPLAINT: &str = "I have escalated this issue to our senior management team. We will be conducting a thorough investigation to identify the root cause and implement corrective measures. As an immediate step, I have arranged for a replacement to be sent to you, which you should receive within 2-3 business days.";

const SUPPORT_REQUEST: &str = "\
Based on your description, I recommend trying the following steps:

1. Clear your browser cache and cookies
2. Restart the application
3. Ensure you are using the latest version of our software

These steps resolve similar issues in most cases.";

const INTRODUCTION: &str = "It's great to learn about your background and interests. Our organization is always looking to connect with professionals in your field, and I believe there could be some interesting opportunities for collaboration.";

const FEEDBACK: &str = "We greatly appreciate your thoughtful feedback. Your suggestions align with some improvements we've been considering, and your perspective provides valuable validation. I've shared your comments with our product team, who will take them into account in our next development cycle.";

const UNKNOWN: &str = "I've received your message and will review it carefully. If I need any additional information to properly address your email, I'll be sure to reach out.";

/// Response paragraph for `category`.
///
/// The email text is accepted but does not influence the result.
pub fn generate_response(_text: &str, category: Category) -> &'static str {
    match category {
        Category::Inquiry => INQUIRY,
        Category::MeetingRequest => MEETING_REQUEST,
        Category::FollowUp => FOLLOW_UP,
        Category::ThankYou => THANK_YOU,
        Category::Complaint => COMPLAINT,
        Category::SupportRequest => SUPPORT_REQUEST,
        Category::Introduction => INTRODUCTION,
        Category::Feedback => FEEDBACK,
        Category::Unknown => UNKNOWN,
    }
}
