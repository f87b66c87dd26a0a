//! Configuration lue depuis l'environnement (et le fichier `.env`),
//! avec les valeurs de `consts` par défaut.

use anyhow::{anyhow, Result};
use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use url::Url;

use crate::consts;
use crate::validator::{EmptyInputPolicy, ValidatorConfig};

/// Configuration du serveur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub http_port: u16,
    pub accounts_db_path: PathBuf,
}

/// Configuration du client de vérification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url_base: Url,
    pub validator: ValidatorConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            http_port: parse_or(&lookup, "HTTP_PORT", consts::HTTP_PORT)?,
            accounts_db_path: lookup("ACCOUNTS_DB_PATH")
                .unwrap_or_else(|| consts::ACCOUNTS_DB_PATH.to_string())
                .into(),
        })
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url_base = parse_or(&lookup, "API_URL_BASE", Url::parse(consts::API_URL_BASE)?)?;
        let debounce_ms = parse_or(&lookup, "DEBOUNCE_MS", consts::DEBOUNCE_MS)?;
        let check_empty = parse_or(&lookup, "CHECK_EMPTY_INPUT", false)?;

        let empty_input = if check_empty {
            EmptyInputPolicy::Check
        } else {
            EmptyInputPolicy::SkipAsValid
        };

        Ok(Self {
            api_url_base,
            validator: ValidatorConfig::default()
                .with_debounce(Duration::from_millis(debounce_ms))
                .with_empty_input(empty_input),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid value for {}: {:?} ({})", key, raw, e)),
        None => Ok(default),
    }
}
