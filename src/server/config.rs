use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_TOKEN_HEADER_KEY: &str = "Authorization";
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:8080";

/// Placeholder secrets shipped in example env files, rejected in production.
const PLACEHOLDER_JWT_SECRET: &str = "your_secret_key_here";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret_key: String,
    pub token_header_key: String,
    pub jwt_expiry_hours: i64,

    pub cors_allowed_origins: Vec<String>,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            token_header_key: std::env::var("TOKEN_HEADER_KEY")
                .unwrap_or_else(|_| DEFAULT_TOKEN_HEADER_KEY.to_string()),
            jwt_expiry_hours: match std::env::var("JWT_EXPIRY_HOURS") {
                Ok(value) => value.parse::<i64>().map_err(|_| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRY_HOURS".to_string(),
                    value,
                })?,
                Err(_) => DEFAULT_JWT_EXPIRY_HOURS,
            },
            cors_allowed_origins: parse_origins(
                &std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGINS.to_string()),
            ),
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        };

        config.check_secret()?;

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects placeholder JWT secrets when running in production.
    pub fn check_secret(&self) -> Result<(), ConfigError> {
        let placeholder = self.jwt_secret_key.contains("example")
            || self.jwt_secret_key == PLACEHOLDER_JWT_SECRET;

        if self.is_production() && placeholder {
            return Err(ConfigError::InsecureJwtSecret);
        }

        Ok(())
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
