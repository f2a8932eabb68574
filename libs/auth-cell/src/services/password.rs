// =====================================================================================
// PASSWORD SERVICE - ARGON2 HASHING FOR ADMIN CREDENTIALS
// =====================================================================================

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::instrument;

pub struct PasswordService;

impl PasswordService {
    #[instrument(skip(password))]
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    /// `Ok(false)` for a wrong password, `Err` only when `hash` is not a
    /// valid PHC string.
    #[instrument(skip(password, hash))]
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;
        let argon2 = Argon2::default();

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PasswordService::hash_password("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(PasswordService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!PasswordService::verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = PasswordService::hash_password("same").unwrap();
        let second = PasswordService::hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_hash_is_an_error() {
        assert!(PasswordService::verify_password("x", "not-a-phc-string").is_err());
    }
}
