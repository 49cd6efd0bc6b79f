//! Parse Config from config file

use std::{fs::read_to_string, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use leptos::config::LeptosOptions;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::LevelParseError;

use crate::gateway::{Gateway, RestGateway};


/// Where the config lives unless `LANGCLUB_CONFIG` says otherwise
pub const DEFAULT_CONFIG_PATH: &str = "/etc/langclub/config.toml";
pub const CONFIG_PATH_VAR: &str = "LANGCLUB_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
    TomlParse(toml::de::Error),
    ConfigFileRead(PathBuf, std::io::Error),
    LogLevel(LevelParseError),
    SiteAddrParse(std::net::AddrParseError),
    GatewayClient(reqwest::Error),
}
impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::TomlParse(e) => {
                write!(f, "Unable to parse config file as toml: {e}")
            }
            Self::ConfigFileRead(path, e) => {
                write!(f, "Unable to read config file {}: {e}", path.display())
            }
            Self::LogLevel(e) => {
                write!(f, "Unable to parse log_level: {e}")
            }
            Self::SiteAddrParse(e) => {
                write!(f, "Unable to parse web.site_addr as socket address: {e}")
            }
            Self::GatewayClient(e) => {
                write!(f, "Unable to build the http client for the gateway: {e}")
            }
        }
    }
}
impl From<LevelParseError> for ConfigError {
    fn from(value: LevelParseError) -> Self {
        Self::LogLevel(value)
    }
}
impl From<std::net::AddrParseError> for ConfigError {
    fn from(value: std::net::AddrParseError) -> Self {
        Self::SiteAddrParse(value)
    }
}
impl From<reqwest::Error> for ConfigError {
    fn from(value: reqwest::Error) -> Self {
        Self::GatewayClient(value)
    }
}
impl std::error::Error for ConfigError {}

#[derive(Deserialize)]
struct WebConfigData {
    /// The address to host the website on (e.g. 127.0.0.1:8080)
    site_addr: String,
}

#[derive(Deserialize)]
struct GatewayConfigData {
    /// Base url of the hosted gateway, without the rest path
    url: String,
    /// The public key. It ends up in every browser anyway, so it is no secret.
    anon_key: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}
fn default_timeout_secs() -> u64 {
    10
}

/// The table each kind of content is read from
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Sources {
    pub site_settings: String,
    pub about_cards: String,
    pub events: String,
    pub slideshow_images: String,
    pub home_slides: String,
    pub testimonials: String,
    pub execom: String,
    pub panel: String,
    pub club_members: String,
}
impl Default for Sources {
    fn default() -> Self {
        Self {
            site_settings: "site_settings".to_string(),
            about_cards: "about_cards".to_string(),
            events: "events".to_string(),
            slideshow_images: "slideshow_images".to_string(),
            home_slides: "home_slides".to_string(),
            testimonials: "panel_testimonials".to_string(),
            execom: "execom_members".to_string(),
            panel: "panel_members".to_string(),
            club_members: "club_members".to_string(),
        }
    }
}

#[derive(Deserialize, Default)]
struct AppConfigData {
    id: Option<String>,
    /// a json object, given as string
    client_config: Option<String>,
    initial_auth_token: Option<String>,
}

/// Deployment globals. Read at startup and logged, nothing else depends on them.
#[derive(Debug, Clone, PartialEq)]
pub struct AppEnvironment {
    pub id: String,
    pub client_config: serde_json::Value,
    pub initial_auth_token: Option<String>,
}
impl From<AppConfigData> for AppEnvironment {
    fn from(value: AppConfigData) -> Self {
        let client_config = match value.client_config.as_deref() {
            None => serde_json::Value::Object(Default::default()),
            Some(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(v @ serde_json::Value::Object(_)) => v,
                Ok(_) => {
                    tracing::warn!("app.client_config is not a json object. Using {{}} instead.");
                    serde_json::Value::Object(Default::default())
                }
                Err(e) => {
                    tracing::warn!("Unable to parse app.client_config ({e}). Using {{}} instead.");
                    serde_json::Value::Object(Default::default())
                }
            },
        };
        Self {
            id: value.id.unwrap_or_else(|| "default-app-id".to_string()),
            client_config,
            initial_auth_token: value.initial_auth_token,
        }
    }
}

/// The config data as it is present in (a well-formed) toml config file
#[derive(Deserialize)]
struct ConfigData {
    web: WebConfigData,
    log_level: Option<String>,
    gateway: GatewayConfigData,
    #[serde(default)]
    sources: Sources,
    #[serde(default)]
    app: AppConfigData,
}

/// The main config object that will be available across the Serverside application
pub struct Config {
    pub gateway: Arc<dyn Gateway>,
    pub sources: Sources,
    pub leptos_options: LeptosOptions,
    pub log_level: LevelFilter,
    pub app: AppEnvironment,
}
impl Config {
    fn try_from_config_data(value: ConfigData) -> Result<Self, ConfigError> {
        let addr = std::net::SocketAddr::from_str(&value.web.site_addr)?;

        let leptos_options = LeptosOptions::builder()
            .output_name("langclub")
            .site_root("target/site")
            .site_pkg_dir("pkg")
            .site_addr(addr)
            .build();
        let log_level = tracing_subscriber::filter::LevelFilter::from_str(
            &value.log_level.unwrap_or("INFO".to_string()),
        )?;

        let gateway = RestGateway::new(
            &value.gateway.url,
            value.gateway.anon_key,
            Duration::from_secs(value.gateway.timeout_secs),
        )?;

        Ok(Self {
            gateway: Arc::new(gateway),
            sources: value.sources,
            leptos_options,
            log_level,
            app: value.app.into(),
        })
    }

    fn try_from_toml(content: &str) -> Result<Self, ConfigError> {
        let config_data: ConfigData = toml::from_str(content).map_err(ConfigError::TomlParse)?;
        Self::try_from_config_data(config_data)
    }

    pub fn try_create() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let content = read_to_string(&path).map_err(|e| ConfigError::ConfigFileRead(path, e))?;
        Self::try_from_toml(&content)
    }
}
