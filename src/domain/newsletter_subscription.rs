use chrono::NaiveDate;
use htmlescape::encode_minimal;
use serde::Deserialize;

use super::{EmailContent, FormField, InvalidSubmission, SubscriberEmail};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NewsletterFormData {
    pub email: FormField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub email: SubscriberEmail,
}

impl TryFrom<NewsletterFormData> for NewsletterSubscription {
    type Error = InvalidSubmission;

    fn try_from(value: NewsletterFormData) -> Result<Self, Self::Error> {
        let email = value
            .email
            .into_text()
            .ok_or(InvalidSubmission::MissingEmail)?;
        let email = SubscriberEmail::parse(email).map_err(|_| InvalidSubmission::InvalidEmail)?;
        Ok(Self { email })
    }
}

impl NewsletterSubscription {
    /// Notification for the subscriptions inbox, stamped with `subscribed_on`.
    pub fn compose(&self, subscribed_on: NaiveDate) -> EmailContent {
        let date = subscribed_on.format("%-m/%-d/%Y");

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #055fa3;">New Newsletter Subscription</h2>
    <div style="background-color: #f5f5f5; padding: 20px; border-radius: 5px;">
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Subscription Date:</strong> {date}</p>
        <p><strong>Source:</strong> Website Footer Newsletter Form</p>
    </div>
    <p style="margin-top: 20px; color: #666; font-size: 12px;">
        This subscription was created from the Glumia Solutions website footer.
    </p>
</div>"#,
            email = encode_minimal(self.email.as_ref()),
        );

        let text_body = format!(
            "New Newsletter Subscription\n\
             \n\
             Email: {email}\n\
             Subscription Date: {date}\n\
             Source: Website Footer Newsletter Form\n\
             \n\
             ---\n\
             This subscription was created from the Glumia Solutions website footer.\n",
            email = self.email,
        );

        EmailContent {
            subject: "New Newsletter Subscription".into(),
            html_body,
            text_body,
        }
    }
}
