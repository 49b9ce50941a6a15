use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

use crate::error::AppError;
use crate::services::providers::openai::OPENAI_API_BASE;

/// Model used when `OPENAI_MODEL` is not set.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone)]
pub struct RemedyConfig {
    pub common: CommonConfig,
    pub auth: AuthConfig,
    pub openai: OpenAiSettings,
}

/// Settings shared by every deployment: just the listen port.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Shared secret callers must present in `X-Custom-Auth`.
    pub key: String,
}

#[derive(Debug, Clone, Default)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: Option<u32>,
}

impl RemedyConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let common: CommonConfig = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(RemedyConfig {
            common,
            auth: AuthConfig {
                key: get_env("AUTH_KEY", None, is_prod)?,
            },
            openai: OpenAiSettings {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                base_url: get_env("OPENAI_API_BASE", Some(OPENAI_API_BASE), is_prod)?,
                max_tokens: env::var("OPENAI_MAX_TOKENS")
                    .ok()
                    .and_then(|value| value.parse().ok()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
