use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct RecipeConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub service_version: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub mongodb: MongoConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    /// Bounds server selection and connection establishment.
    pub timeout_secs: u64,
}

impl MongoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerConfig {
    pub enabled: bool,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

impl RecipeConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let environment: Environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "dev".to_string())
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;
        let is_prod = environment == Environment::Prod;

        let timeout_secs = get_env("MONGO_TIMEOUT_SECS", Some("10"), false)?
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid MONGO_TIMEOUT_SECS: {}", e))
            })?;

        let swagger_default = if is_prod { "false" } else { "true" };
        let swagger_enabled = parse_bool(&get_env(
            "SWAGGER_ENABLED",
            Some(swagger_default),
            false,
        )?)?;

        Ok(RecipeConfig {
            common: common_config,
            environment,
            service_name: env!("CARGO_PKG_NAME").to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            mongodb: MongoConfig {
                uri: get_env("MONGO_URI", None, is_prod)?,
                database: get_env("MONGO_DATABASE", Some("recipes_db"), is_prod)?,
                timeout_secs,
            },
            swagger: SwaggerConfig {
                enabled: swagger_enabled,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "Invalid boolean value: {}",
            other
        ))),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Dev));
        assert_eq!("PROD".parse::<Environment>(), Ok(Environment::Prod));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(matches!(
            parse_bool("maybe"),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_get_env_default_and_required() {
        let key = "RECIPE_SERVICE_TEST_UNSET_VARIABLE";
        assert_eq!(get_env(key, Some("fallback"), false).unwrap(), "fallback");
        assert!(matches!(
            get_env(key, None, false),
            Err(AppError::ConfigError(_))
        ));
        assert!(matches!(
            get_env(key, Some("fallback"), true),
            Err(AppError::ConfigError(_))
        ));
    }

    #[test]
    fn test_mongo_timeout() {
        let config = MongoConfig {
            uri: "mongodb://localhost:27017".to_string(),
            database: "recipes_db".to_string(),
            timeout_secs: 3,
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
