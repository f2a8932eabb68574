use chrono::Duration;
use tracing::{info, warn};

use shared_config::AppConfig;
use shared_models::auth::{LoginRequest, TokenResponse};
use shared_utils::jwt::issue_token;

use crate::error::AuthError;
use crate::services::PasswordService;

pub const ADMIN_ROLE: &str = "admin";

/// Checks admin credentials against the configured email and argon2 hash
/// and issues bearer tokens.
pub struct AdminAuthService<'a> {
    config: &'a AppConfig,
}

impl<'a> AdminAuthService<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    pub fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AuthError> {
        if !self.config.is_admin_configured() {
            warn!("Admin login attempted while login is not configured");
            return Err(AuthError::LoginDisabled);
        }

        // Hash is checked even for an unknown email so both paths cost the same.
        let password_ok =
            PasswordService::verify_password(&request.password, &self.config.admin_password_hash)?;
        let email_ok = request.email.trim().eq_ignore_ascii_case(&self.config.admin_email);

        if !(password_ok && email_ok) {
            warn!("Rejected admin login for {}", request.email);
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = Duration::try_minutes(self.config.token_ttl_minutes).ok_or_else(|| {
            AuthError::Token(format!(
                "Token lifetime of {} minutes is out of range",
                self.config.token_ttl_minutes
            ))
        })?;

        let (access_token, expires_at) =
            issue_token(&self.config.admin_email, ADMIN_ROLE, ttl, &self.config.jwt_secret)
                .map_err(AuthError::Token)?;

        info!("Admin {} logged in", self.config.admin_email);

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_utils::jwt::validate_token;
    use shared_utils::test_utils::TestConfig;

    fn configured() -> AppConfig {
        let hash = PasswordService::hash_password("s3cret-Passw0rd").unwrap();
        TestConfig::default().with_password_hash(&hash).to_app_config()
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_login_issues_admin_token() {
        let config = configured();
        let service = AdminAuthService::new(&config);

        let response = service.login(&request("admin@example.com", "s3cret-Passw0rd")).unwrap();

        assert_eq!(response.token_type, "Bearer");
        let user = validate_token(&response.access_token, &config.jwt_secret).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.id, "admin@example.com");
    }

    #[test]
    fn test_wrong_password_or_email() {
        let config = configured();
        let service = AdminAuthService::new(&config);

        assert_matches!(
            service.login(&request("admin@example.com", "nope")),
            Err(AuthError::InvalidCredentials)
        );
        assert_matches!(
            service.login(&request("doctor@example.com", "s3cret-Passw0rd")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_login_disabled_without_hash() {
        let config = TestConfig::default().to_app_config();
        let service = AdminAuthService::new(&config);

        assert_matches!(
            service.login(&request("admin@example.com", "anything")),
            Err(AuthError::LoginDisabled)
        );
    }

    #[test]
    fn test_out_of_range_token_lifetime_is_an_error() {
        for ttl in [i64::MAX, i64::MIN, 1_000_000_000_000] {
            let config = AppConfig {
                token_ttl_minutes: ttl,
                ..configured()
            };
            let service = AdminAuthService::new(&config);

            assert_matches!(
                service.login(&request("admin@example.com", "s3cret-Passw0rd")),
                Err(AuthError::Token(_))
            );
        }
    }
}
