use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct EmailSettings {
    pub smtp_host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub smtp_port: u16,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub sender: Option<String>,
    pub contact_recipient: String,
    pub newsletter_recipient: String,
    pub timeout_milliseconds: Option<u64>,
}

#[derive(Debug)]
pub struct SmtpCredentials<'a> {
    pub username: &'a str,
    pub password: &'a Secret<String>,
}

impl EmailSettings {
    pub fn credentials(&self) -> Option<SmtpCredentials<'_>> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self
            .password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty())?;
        Some(SmtpCredentials { username, password })
    }

    // Falls back to the sending account.
    pub fn sender(&self) -> Option<&str> {
        self.sender
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.as_deref().filter(|u| !u.is_empty()))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );
    // Legacy deployment variables.
    let settings = legacy_overrides(|name| std::env::var(name).ok())
        .into_iter()
        .try_fold(builder, |builder, (key, value)| builder.set_override(key, value))?
        .build()?;

    settings.try_deserialize::<Settings>()
}

const LEGACY_VARIABLES: [(&str, &str); 5] = [
    ("SMTP_USER", "email.username"),
    ("SMTP_PASS", "email.password"),
    ("SMTP_FROM", "email.sender"),
    ("SMTP_TO", "email.contact_recipient"),
    ("SMTP_SUBSCRIPTION_BOX", "email.newsletter_recipient"),
];

// An empty variable leaves the yaml value in place.
fn legacy_overrides(lookup: impl Fn(&str) -> Option<String>) -> Vec<(&'static str, String)> {
    LEGACY_VARIABLES
        .iter()
        .filter_map(|(variable, key)| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value))
        })
        .collect()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
