use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use shared_config::AppConfig;

pub struct TestConfig {
    pub jwt_secret: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub doctor_count: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
            admin_email: "admin@example.com".to_string(),
            admin_password_hash: String::new(),
            doctor_count: 20,
        }
    }
}

impl TestConfig {
    pub fn with_password_hash(mut self, hash: &str) -> Self {
        self.admin_password_hash = hash.to_string();
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            admin_email: self.admin_email.clone(),
            admin_password_hash: self.admin_password_hash.clone(),
            jwt_secret: self.jwt_secret.clone(),
            doctor_count: self.doctor_count,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(subject: &str, role: &str, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": subject,
            "email": subject,
            "role": role,
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_admin_token(secret: &str) -> String {
        Self::create_test_token("admin@example.com", "admin", secret, Some(1))
    }

    pub fn create_expired_token(secret: &str) -> String {
        Self::create_test_token("admin@example.com", "admin", secret, Some(-1))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::validate_token;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().with_password_hash("hash");
        let app_config = config.to_app_config();

        assert_eq!(app_config.admin_email, "admin@example.com");
        assert_eq!(app_config.admin_password_hash, "hash");
        assert!(app_config.is_admin_configured());
    }

    #[test]
    fn test_jwt_token_creation() {
        let secret = "test-secret";
        let token = JwtTestUtils::create_admin_token(secret);

        assert_eq!(token.split('.').count(), 3);
        assert!(validate_token(&token, secret).unwrap().is_admin());
    }

    #[test]
    fn test_expired_token_fails_validation() {
        let secret = "test-secret";
        let token = JwtTestUtils::create_expired_token(secret);

        assert!(validate_token(&token, secret).is_err());
    }
}
