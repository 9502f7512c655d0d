//! Process configuration.
//!
//! The service is configured entirely from the environment: the API key that
//! guards the schedule/task routes and the Supabase instance credentials.
//! Server host/port have defaults and can be overridden by CLI flags.

use std::env;

use thiserror::Error;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Shared secret expected in the `apikey` request header.
    pub api_key: String,
    pub supabase: SupabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub max_connections: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            max_connections: default_max_connections(),
        }
    }
}

/// Credentials for the remote Supabase instance.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Base URL of the instance, e.g. `https://xyz.supabase.co`.
    pub instance_url: String,
    /// Anon (publishable) key. Unused by the service role client but part of
    /// the deployment contract.
    pub anon_key: Option<String>,
    /// Service role key used for all data access.
    pub service_role_key: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{0}' is not set")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable '{name}': {message}")]
    InvalidEnvVar { name: String, message: String },
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Required: `API_KEY`, `SUPABASE_INSTANCE_URL`, `SUPABASE_SERVICE_ROLE_KEY`.
    /// Optional: `SUPABASE_INSTANCE_ANON_KEY`, `HOST`, `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut server = ServerConfig::default();
        if let Some(host) = optional_var("HOST") {
            server.host = host;
        }
        if let Some(port) = optional_var("PORT") {
            server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    message: format!("'{port}' is not a valid port number"),
                })?;
        }

        Ok(Self {
            server,
            api_key: required_var("API_KEY")?,
            supabase: SupabaseConfig {
                instance_url: required_var("SUPABASE_INSTANCE_URL")?,
                anon_key: optional_var("SUPABASE_INSTANCE_ANON_KEY"),
                service_role_key: required_var("SUPABASE_SERVICE_ROLE_KEY")?,
            },
        })
    }
}

// ============================================================================
// Private Helpers
// ============================================================================

fn required_var(name: &str) -> Result<String, ConfigError> {
    match optional_var(name) {
        Some(value) => Ok(value),
        None => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Read an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> usize {
    100
}
