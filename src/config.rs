use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (e.g., 8080)
    pub app_port: u16,

    /// Gemini API key, required
    pub gemini_api_key: String,
    /// Model identifier sent with every generation request
    pub gemini_model: String,
    /// Gemini base URL; overridable for tests and proxies
    pub gemini_base_url: Url,

    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
    /// Extra attempts allowed after a transport failure
    pub max_retries: u32,

    /// Origins accepted by the CORS layer
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let app_host = env_or_default("APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16>("APP_PORT", 8080)?;

        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingVar("GEMINI_API_KEY"))?;
        let gemini_model = env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
        let gemini_base_url = parse_url_or_default("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)?;

        let request_timeout_secs = parse_or_default::<u64>("REQUEST_TIMEOUT_SECS", 60)?;
        let max_retries = parse_or_default::<u32>("MAX_RETRIES", 1)?;

        let allowed_origins = env_or_default("ALLOWED_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            app_host,
            app_port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            request_timeout_secs,
            max_retries,
            allowed_origins,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default(key: &'static str, default: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_url_or_default(key: &'static str, default: &'static str) -> Result<Url, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
        name: key,
        value: raw,
    })
}
