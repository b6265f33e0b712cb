use anyhow::{bail, Context, Result};

/// Signing secret shipped for local development only.
pub const DEFAULT_JWT_SECRET: &str = "default_secret_key";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// Startup fails if the Gemini API key is missing, or if production still
/// runs with the development signing secret.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub jwt_secret: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            jwt_secret: env_or("JWT_SECRET", DEFAULT_JWT_SECRET),
            environment: env_or("ENVIRONMENT", "development"),
            host: env_or("API_HOST", "0.0.0.0"),
            port: env_or("API_PORT", "8000")
                .parse::<u16>()
                .context("API_PORT must be a valid port number")?,
            log_level: env_or("LOG_LEVEL", "info").to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that must never reach a running server.
    pub fn validate(&self) -> Result<()> {
        if self.gemini_api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY not set in environment");
        }
        if self.is_production() && self.jwt_secret == DEFAULT_JWT_SECRET {
            bail!("JWT_SECRET must be set in production");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
