use anyhow::Context;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::response::Code;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::configuration::EmailSettings;
use crate::domain::EmailContent;
use crate::utils::error_chain_fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub sender: String,
    pub recipient: String,
    pub content: EmailContent,
}

#[derive(thiserror::Error)]
pub enum EmailClientError {
    #[error("The mail relay rejected our credentials")]
    AuthenticationFailed(#[source] anyhow::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for EmailClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

// Implementations must not retry.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), EmailClientError>;
}

pub struct SmtpEmailClient {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailClient {
    pub fn new(settings: &EmailSettings) -> Result<Self, anyhow::Error> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .with_context(|| format!("Invalid SMTP relay host {}", settings.smtp_host))?
            .port(settings.smtp_port);
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(Some(timeout));
        }
        if let Some(credentials) = settings.credentials() {
            builder = builder.credentials(Credentials::new(
                credentials.username.to_owned(),
                credentials.password.expose_secret().to_owned(),
            ));
        }

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

#[async_trait]
impl EmailClient for SmtpEmailClient {
    #[tracing::instrument(
        name = "Sending email over SMTP",
        skip(self, email),
        fields(recipient = %email.recipient, subject = %email.content.subject)
    )]
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), EmailClientError> {
        let message = build_message(email)?;

        self.mailer.send(message).await.map_err(|e| {
            let refused_login = e.status().map_or(false, is_authentication_failure)
                || (e.is_client() && mentions_authentication(&e.to_string()));
            if refused_login {
                EmailClientError::AuthenticationFailed(
                    anyhow::Error::new(e).context("SMTP authentication failed"),
                )
            } else {
                EmailClientError::Unexpected(anyhow::Error::new(e).context("Failed to send email"))
            }
        })?;

        Ok(())
    }
}

fn build_message(email: &OutgoingEmail) -> Result<Message, anyhow::Error> {
    let sender: Mailbox = email
        .sender
        .parse()
        .with_context(|| format!("Invalid sender address {}", email.sender))?;
    let recipient: Mailbox = email
        .recipient
        .parse()
        .with_context(|| format!("Invalid recipient address {}", email.recipient))?;

    Message::builder()
        .from(sender)
        .to(recipient)
        .subject(email.content.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            email.content.text_body.clone(),
            email.content.html_body.clone(),
        ))
        .context("Failed to build email message")
}

fn is_authentication_failure(code: Code) -> bool {
    matches!(code.to_string().as_str(), "454" | "530" | "534" | "535")
}

// lettre reports a failed mechanism negotiation as a client error with no reply code.
fn mentions_authentication(message: &str) -> bool {
    message.to_lowercase().contains("authentication")
}
