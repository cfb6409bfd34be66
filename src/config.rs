use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub max_questions: usize,
    pub max_upload_bytes: usize,
    pub generation_timeout_secs: u64,
    pub quiz_ttl_hours: Option<u64>,
    pub generation_seed: Option<u64>,
    pub embedding_dims: usize,
    pub embedding_api_url: Option<String>,
    pub embedding_api_key: Option<String>,
    pub embedding_model: String,
    pub embedding_timeout_secs: u64,
}

const DEFAULT_EMBEDDING_MODEL: &str = "nomic-ai/nomic-embed-text-v1.5";

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:8000".to_string(),
            database_url: String::new(),
            max_questions: 50,
            max_upload_bytes: 20 * 1024 * 1024,
            generation_timeout_secs: 120,
            quiz_ttl_hours: None,
            generation_seed: None,
            embedding_dims: 128,
            embedding_api_url: None,
            embedding_api_key: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_timeout_secs: 10,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            max_questions: get_env_parse_or("MAX_QUESTIONS", 50)?,
            max_upload_bytes: get_env_parse_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            generation_timeout_secs: get_env_parse_or("GENERATION_TIMEOUT_SECS", 120)?,
            quiz_ttl_hours: get_env_parse_opt("QUIZ_TTL_HOURS")?,
            generation_seed: get_env_parse_opt("GENERATION_SEED")?,
            embedding_dims: get_env_parse_or("EMBEDDING_DIMS", 128)?,
            embedding_api_url: env::var("EMBEDDING_API_URL").ok(),
            embedding_api_key: env::var("EMBEDDING_API_KEY").ok(),
            embedding_model: get_env_parse_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL.to_string())?,
            embedding_timeout_secs: get_env_parse_or("EMBEDDING_TIMEOUT_SECS", 10)?,
        })
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn embedding_timeout(&self) -> Duration {
        Duration::from_secs(self.embedding_timeout_secs)
    }

    pub fn quiz_ttl(&self) -> Option<chrono::Duration> {
        self.quiz_ttl_hours
            .and_then(|h| i64::try_from(h).ok())
            .map(chrono::Duration::hours)
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(None),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match get_env_parse_opt(name)? {
        Some(value) => Ok(value),
        None => {
            tracing::debug!("{} not set. Defaulting to {}", name, default);
            Ok(default)
        }
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
