use anyhow::{Context, Result};

const DEFAULT_AUTH_API_URL: &str = "https://authentication-8e1c.onrender.com/auth";
const DEFAULT_JOBS_API_URL: &str = "https://eday-project.onrender.com/api/v1/alerts/upload";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:5500,https://your-frontend-domain.com";

/// Application configuration loaded from environment variables.
/// Startup fails if `DATABASE_URL` is missing; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_api_url: String,
    pub jobs_api_url: String,
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth_api_url: env_or("AUTH_API_URL", DEFAULT_AUTH_API_URL),
            jobs_api_url: env_or("JOBS_API_URL", DEFAULT_JOBS_API_URL),
            allowed_origins: parse_origins(&env_or(
                "CORS_ALLOWED_ORIGINS",
                DEFAULT_ALLOWED_ORIGINS,
            )),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma separated origin list, dropping blank entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
