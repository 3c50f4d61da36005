use std::str::FromStr;

use crate::admin_audit::{
    application::dispatchers::admin_audit_event_dispatcher::DEFAULT_AUDIT_QUEUE_CAPACITY,
    interfaces::rest::middleware::admin_audit_middleware::DEFAULT_BODY_CAPTURE_LIMIT_BYTES,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AppConfigError {
    #[error("{0} must be set")]
    MissingVariable(&'static str),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub jwt_secret: String,
    pub audit_queue_capacity: usize,
    pub audit_body_capture_limit_bytes: usize,
    pub audit_trust_forwarded_for: bool,
    pub audit_shutdown_grace_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. `JWT_SECRET` has no
    /// default and must be present and non-blank.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppConfigError> {
        let text_var =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(AppConfigError::MissingVariable("JWT_SECRET"))?;

        Ok(Self {
            port: parsed_var(&lookup, "PORT", 8081),
            postgres_host: text_var("POSTGRES_HOST", "127.0.0.1"),
            postgres_port: parsed_var(&lookup, "POSTGRES_PORT", 5432),
            postgres_user: text_var("POSTGRES_USER", "postgres"),
            postgres_password: text_var("POSTGRES_PASSWORD", "admin"),
            postgres_database: text_var("POSTGRES_DATABASE", "blog"),
            jwt_secret,
            audit_queue_capacity: parsed_var(
                &lookup,
                "AUDIT_QUEUE_CAPACITY",
                DEFAULT_AUDIT_QUEUE_CAPACITY,
            )
            .max(1),
            audit_body_capture_limit_bytes: parsed_var(
                &lookup,
                "AUDIT_BODY_CAPTURE_LIMIT_BYTES",
                DEFAULT_BODY_CAPTURE_LIMIT_BYTES,
            ),
            audit_trust_forwarded_for: parsed_var(&lookup, "AUDIT_TRUST_FORWARDED_FOR", false),
            audit_shutdown_grace_seconds: parsed_var(&lookup, "AUDIT_SHUTDOWN_GRACE_SECONDS", 5),
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn parsed_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    lookup(name)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
