mod contact_submission;
mod email_content;
mod form_field;
mod invalid_submission;
mod newsletter_subscription;
mod subscriber_email;

pub use contact_submission::{ContactFormData, ContactSubmission};
pub use email_content::EmailContent;
pub use form_field::FormField;
pub use invalid_submission::InvalidSubmission;
pub use newsletter_subscription::{NewsletterFormData, NewsletterSubscription};
pub use subscriber_email::SubscriberEmail;
