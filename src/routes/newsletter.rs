use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::configuration::EmailSettings;
use crate::domain::{EmailContent, InvalidSubmission, NewsletterFormData, NewsletterSubscription};
use crate::routes::form_relay::{form_data, relay, FormCopy, FormError, FormSubmission, SuccessBody};
use crate::startup::AppState;

impl FormSubmission for NewsletterSubscription {
    const COPY: FormCopy = FormCopy {
        form: "newsletter",
        not_configured: "Newsletter service not available. Please try again later.",
        authentication_failed: "Newsletter service authentication failed. Please try again later.",
        send_failed: "Failed to subscribe to newsletter. Please try again later.",
        sent: "Successfully subscribed to newsletter!",
    };

    fn recipient(settings: &EmailSettings) -> &str {
        &settings.newsletter_recipient
    }

    // Stamped with the server's local date at send time.
    fn compose_email(&self) -> EmailContent {
        self.compose(chrono::Local::now().date_naive())
    }
}

#[tracing::instrument(
    name = "Relaying a newsletter subscription",
    skip(state, body),
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SuccessBody>, FormError> {
    let form: NewsletterFormData = form_data(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected newsletter form body");
        InvalidSubmission::MissingEmail
    })?;
    let subscription = NewsletterSubscription::try_from(form)?;

    tracing::Span::current().record(
        "subscriber_email",
        &tracing::field::display(&subscription.email),
    );

    relay(&state, &subscription).await
}
