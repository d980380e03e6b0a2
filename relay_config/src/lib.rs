use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use relay_models::{email_address::EmailAddress, smtp::SmtpTls, Sensitive};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding additional config files, separated like `PATH`.
pub const CONFIG_PATHS_VAR: &str = "RELAY_CONFIG";

/// Prefix of environment variables overriding single settings, e.g.
/// `RELAY__EMAIL__HOST`.
pub const ENV_PREFIX: &str = "RELAY";

/// Load the config from the embedded defaults, the files listed in
/// [`CONFIG_PATHS_VAR`] and the `RELAY__*` environment variables, in that
/// order of precedence.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_VAR)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_from(&paths, None)
}

fn load_from(
    paths: &[PathBuf],
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    paths
        .iter()
        .try_fold(builder, |builder, path| {
            let content = read_config_file(path)?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .ignore_empty(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn read_config_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub mode: Mode,
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    #[serde(other)]
    Production,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: bool,
}

/// Delivery settings. The first five are required for sending but may be
/// missing at startup.
#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub recipient: Option<EmailAddress>,
    pub tls: SmtpTls,
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub service_name: String,
    pub sender: Option<EmailAddress>,
}
