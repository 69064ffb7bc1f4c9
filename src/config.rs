use std::{env, str::FromStr, time::Duration};

use anyhow::{Context, Result};

pub const DEFAULT_DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub dog_api_url: String,
    pub dog_api_timeout: Duration,
}

impl Config {
    pub fn init() -> Result<Config> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Config {
            database_url,
            port: parse_or(&lookup, "PORT", 8080)?,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            dog_api_url: lookup("DOG_API_URL").unwrap_or_else(|| DEFAULT_DOG_API_URL.to_string()),
            dog_api_timeout: Duration::from_secs(parse_or(&lookup, "DOG_API_TIMEOUT_SECS", 10)?),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}
