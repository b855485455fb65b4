//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use postboard_core::ServiceConfig;
use postboard_infra::DatabaseConfig;
use postboard_infra::auth::JwtConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub service: ServiceConfig,
    pub graphiql_enabled: bool,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str, default| parse_or(lookup(key), default);
        let flag = |key: &str, default| parse_flag(lookup(key), default);

        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 100),
            min_connections: parsed("DB_MIN_CONNECTIONS", 10),
        });

        let jwt_defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: lookup("JWT_SECRET").unwrap_or(jwt_defaults.secret),
            expiration_hours: parse_or(
                lookup("JWT_EXPIRATION_HOURS"),
                jwt_defaults.expiration_hours,
            ),
            issuer: lookup("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(lookup("PORT"), 8080),
            database,
            jwt,
            service: ServiceConfig {
                expose_error_details: flag("EXPOSE_ERROR_DETAILS", true),
            },
            graphiql_enabled: flag("GRAPHIQL_ENABLED", true),
            telemetry: TelemetryConfig {
                json_logs: lookup("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
                service_name: lookup("SERVICE_NAME")
                    .unwrap_or_else(|| "postboard-api".to_string()),
            },
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") => false,
        _ => default,
    }
}
