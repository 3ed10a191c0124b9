use std::net::TcpListener;
use std::sync::Arc;

use glumia_forms::{
    configuration::get_configuration,
    email_client::SmtpEmailClient,
    startup::run,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("glumia_forms".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    if configuration.email.credentials().is_none() {
        tracing::warn!("SMTP_USER or SMTP_PASS is not set; form submissions will answer 503");
    }
    let email_client = SmtpEmailClient::new(&configuration.email)?;

    let address = format!(
        "{}:{}",
        &configuration.application.host, &configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", &address);
    run(listener, configuration.email, Arc::new(email_client)).await?;
    Ok(())
}
