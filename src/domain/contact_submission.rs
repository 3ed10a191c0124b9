use htmlescape::encode_minimal;
use serde::Deserialize;

use super::{EmailContent, FormField, InvalidSubmission};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ContactFormData {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub subject: FormField,
    pub number: FormField,
}

/// A contact form post with every field filled in.
///
/// `email` is only checked for presence, not shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub number: String,
    pub message: String,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = InvalidSubmission;

    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        let required = |field: FormField| field.into_text().ok_or(InvalidSubmission::MissingFields);

        Ok(Self {
            name: required(value.name)?,
            email: required(value.email)?,
            subject: required(value.subject)?,
            number: required(value.number)?,
            message: required(value.message)?,
        })
    }
}

impl ContactSubmission {
    pub fn compose(&self) -> EmailContent {
        let subject = format!("New Contact Form Submission - {}", self.subject);

        let html_body = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #055fa3;">New Contact Form Submission</h2>
    <div style="background-color: #f5f5f5; padding: 20px; border-radius: 5px;">
        <p><strong>Name:</strong> {name}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Phone:</strong> {number}</p>
        <p><strong>Subject:</strong> {subject}</p>
        <p><strong>Message:</strong></p>
        <p style="background-color: white; padding: 15px; border-radius: 3px; border-left: 4px solid #055fa3;">{message}</p>
    </div>
    <p style="margin-top: 20px; color: #666; font-size: 12px;">
        This message was sent from the Glumia Solutions contact form.
    </p>
</div>"#,
            name = encode_minimal(&self.name),
            email = encode_minimal(&self.email),
            number = encode_minimal(&self.number),
            subject = encode_minimal(&self.subject),
            message = encode_minimal(&self.message),
        );

        let text_body = format!(
            "New Contact Form Submission - {subject}\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {number}\n\
             Subject: {subject}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             This message was sent from the Glumia Solutions contact form.\n",
            name = self.name,
            email = self.email,
            number = self.number,
            subject = self.subject,
            message = self.message,
        );

        EmailContent {
            subject,
            html_body,
            text_body,
        }
    }
}
