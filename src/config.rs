use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Only the fetch command needs a key; local match files score without one.
    pub api_key: Option<String>,
    pub region: String,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na1".to_string());

        let cache_dir = match env::var("PENTA_CACHE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .ok_or_else(|| {
                    AppError::ConfigError(
                        "no home directory; set PENTA_CACHE_DIR".to_string(),
                    )
                })?
                .join(".penta_score"),
        };

        Ok(Config { api_key, region, cache_dir })
    }

    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = Config {
            api_key: None,
            region: "na1".to_string(),
            cache_dir: PathBuf::from("."),
        };
        assert!(matches!(config.require_api_key(), Err(AppError::ConfigError(_))));
    }
}
