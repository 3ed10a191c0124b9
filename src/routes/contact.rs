use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::configuration::EmailSettings;
use crate::domain::{ContactFormData, ContactSubmission, EmailContent, InvalidSubmission};
use crate::routes::form_relay::{form_data, relay, FormCopy, FormError, FormSubmission, SuccessBody};
use crate::startup::AppState;

impl FormSubmission for ContactSubmission {
    const COPY: FormCopy = FormCopy {
        form: "contact",
        not_configured:
            "Email service not configured. Please contact us directly at info@glumia.com",
        authentication_failed:
            "Email authentication failed. Please contact us directly at info@glumia.com",
        send_failed: "Failed to send email. Please try again later or contact us directly at info@glumia.com",
        sent: "Email sent successfully!",
    };

    fn recipient(settings: &EmailSettings) -> &str {
        &settings.contact_recipient
    }

    fn compose_email(&self) -> EmailContent {
        self.compose()
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(state, body),
    fields(
        sender_email = tracing::field::Empty,
        subject = tracing::field::Empty
    )
)]
pub async fn contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessBody>, FormError> {
    let form: ContactFormData = form_data(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected contact form body");
        InvalidSubmission::MissingFields
    })?;
    let submission = ContactSubmission::try_from(form)?;

    let span = tracing::Span::current();
    span.record("sender_email", &tracing::field::display(&submission.email));
    span.record("subject", &tracing::field::display(&submission.subject));

    relay(&state, &submission).await
}
