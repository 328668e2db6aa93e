use anyhow::Context as _;
use gte_client_core::ClientOptions;
use gte_shared::const_config::client::CLIENT_DEFAULT_REQUEST_TIMEOUT_SECS;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::{
    convert::{TryFrom, TryInto},
    path::PathBuf,
    time::Duration,
};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub client: ClientSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ClientSettings {
    pub server_address: String,
    /// Folder the session is kept in between runs, logs go in a subfolder
    pub store_dir: PathBuf,
    #[serde(
        default = "default_request_timeout_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    CLIENT_DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ClientSettings {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            request_timeout: Some(Duration::from_secs(self.request_timeout_secs)),
        }
    }

    pub fn log_folder(&self) -> PathBuf {
        self.store_dir.join("traces")
    }
}

pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("failed to parse APP_ENVIRONMENT")?;
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.toml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_CLIENT__SERVER_ADDRESS=http://10.0.0.5:3333` would set `Settings.client.server_address`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("failed to load configuration")?;

    settings
        .try_deserialize::<Configuration>()
        .context("failed to deserialize configuration")
}

/// The possible runtime environment for our application.
#[derive(Debug, PartialEq, Eq)]
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

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
