//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field carries a default, so an empty source yields a
//! usable development configuration.

pub mod app;
pub mod auth;
pub mod availability;
pub mod gate;
pub mod identity;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::availability::AvailabilityConfig;
pub use self::gate::GateConfig;
pub use self::identity::{IdentityConfig, IdentityProviderKind};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Access-control gate settings.
    #[serde(default)]
    pub gate: GateConfig,
    /// Identity provider (session store) settings.
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Administrator settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Availability window settings.
    #[serde(default)]
    pub availability: AvailabilityConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `{dir}/default.toml`, the environment-specific overlay
    /// `{dir}/{env}.toml`, and environment variables prefixed with
    /// `ROSTER__` (nested keys separated by `__`).
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ROSTER")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("gate.exempt_paths")
                    .with_list_parse_key("gate.bypass_prefixes")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
