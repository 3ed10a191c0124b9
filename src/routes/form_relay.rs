use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::configuration::EmailSettings;
use crate::domain::{EmailContent, InvalidSubmission};
use crate::email_client::{EmailClientError, OutgoingEmail};
use crate::startup::AppState;
use crate::utils::error_chain_fmt;

pub struct FormCopy {
    pub form: &'static str,
    pub not_configured: &'static str,
    pub authentication_failed: &'static str,
    pub send_failed: &'static str,
    pub sent: &'static str,
}

pub trait FormSubmission {
    const COPY: FormCopy;

    fn recipient(settings: &EmailSettings) -> &str;

    fn compose_email(&self) -> EmailContent;
}

#[derive(Serialize, Debug)]
pub struct SuccessBody {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] InvalidSubmission),
    #[error("{0}")]
    NotConfigured(&'static str),
    #[error("{message}")]
    AuthenticationFailed {
        message: &'static str,
        #[source]
        source: EmailClientError,
    },
    #[error("{message}")]
    SendFailed {
        message: &'static str,
        #[source]
        source: EmailClientError,
    },
}

impl std::fmt::Debug for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl FormError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FormError::Validation(_) => StatusCode::BAD_REQUEST,
            FormError::NotConfigured(_) | FormError::AuthenticationFailed { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            FormError::SendFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

// Any `Content-Type`; only a JSON object is accepted.
pub fn form_data<T: DeserializeOwned>(body: &[u8]) -> Result<T, anyhow::Error> {
    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        other => Err(anyhow::anyhow!("Expected a JSON object, got {}", other)),
    }
}

pub async fn relay<S: FormSubmission>(
    state: &AppState,
    submission: &S,
) -> Result<Json<SuccessBody>, FormError> {
    let copy = S::COPY;

    let sender = match (state.email.credentials(), state.email.sender()) {
        (Some(_), Some(sender)) => sender,
        _ => {
            tracing::warn!(
                form = copy.form,
                "Email credentials not configured. Set SMTP_USER and SMTP_PASS to enable delivery."
            );
            return Err(FormError::NotConfigured(copy.not_configured));
        }
    };

    let email = OutgoingEmail {
        sender: sender.to_owned(),
        recipient: S::recipient(&state.email).to_owned(),
        content: submission.compose_email(),
    };

    match state.email_client.send_email(&email).await {
        Ok(()) => Ok(Json(SuccessBody { message: copy.sent })),
        Err(e) => {
            tracing::error!(form = copy.form, error.cause_chain = ?e, "Failed to relay form submission");
            if matches!(e, EmailClientError::AuthenticationFailed(_)) {
                Err(FormError::AuthenticationFailed {
                    message: copy.authentication_failed,
                    source: e,
                })
            } else {
                Err(FormError::SendFailed {
                    message: copy.send_failed,
                    source: e,
                })
            }
        }
    }
}
