use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub doctor_count: u32,
    pub doctor_start_id: u32,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            doctor_count: 80,
            doctor_start_id: 2000,
            admin_email: String::new(),
            admin_password_hash: String::new(),
            jwt_secret: String::new(),
            token_ttl_minutes: 60,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", defaults.port),
            doctor_count: parse_or("DOCTOR_COUNT", defaults.doctor_count),
            doctor_start_id: parse_or("DOCTOR_START_ID", defaults.doctor_start_id),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_EMAIL not set, using empty value");
                    String::new()
                }),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASSWORD_HASH not set, using empty value");
                    String::new()
                }),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| {
                    warn!("JWT_SECRET not set, using empty value");
                    String::new()
                }),
            token_ttl_minutes: parse_or("TOKEN_TTL_MINUTES", defaults.token_ttl_minutes),
        };

        if !config.is_admin_configured() {
            warn!("Admin login disabled - missing ADMIN_EMAIL, ADMIN_PASSWORD_HASH or JWT_SECRET");
        }

        config
    }

    pub fn is_admin_configured(&self) -> bool {
        !self.admin_email.is_empty()
            && !self.admin_password_hash.is_empty()
            && !self.jwt_secret.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
