//! Application configuration loaded from environment variables.

use std::env;

use randevu_infra::JwtConfig;

#[cfg(feature = "postgres")]
use randevu_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt: jwt_from_env(),
            #[cfg(feature = "postgres")]
            database,
        }
    }
}

fn jwt_from_env() -> JwtConfig {
    let default = JwtConfig::default();
    let jwt = JwtConfig {
        secret: env::var("JWT_SECRET").unwrap_or(default.secret),
        expiration_millis: env::var("JWT_EXPIRATION_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default.expiration_millis),
    };

    if jwt.uses_default_secret() {
        let is_production = env::var("RUST_ENV")
            .map(|v| v == "production" || v == "prod")
            .unwrap_or(false);

        if is_production {
            tracing::error!(
                "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
            );
        } else {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }
    }

    jwt
}
