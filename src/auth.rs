//! Password hashing with argon2.
//!
//! Digests are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) that
//! embed their own salt and parameters, so verification needs nothing else.
//! Both operations are CPU-heavy on purpose; async callers should go through
//! [`hash_in_background`] and [`verify_in_background`].

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::{EmpdeskError, Result};

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| EmpdeskError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Returns whether `password` matches `hash`. A malformed digest never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_in_background(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| EmpdeskError::Hashing(e.to_string()))?
}

pub async fn verify_in_background(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| EmpdeskError::Hashing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter22").unwrap();
        assert_ne!(hash, "hunter22");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("hunter22", &hash));
    }

    #[test]
    fn test_wrong_password_is_false() {
        let hash = hash_password("hunter22").unwrap();
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn test_salt_differs_per_call() {
        let a = hash_password("same-input").unwrap();
        let b = hash_password("same-input").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same-input", &a));
        assert!(verify_password("same-input", &b));
    }

    #[test]
    fn test_malformed_digest_is_false() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[tokio::test]
    async fn test_background_helpers() {
        let hash = hash_in_background("secret1".to_string()).await.unwrap();
        assert!(verify_in_background("secret1".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_in_background("secret2".to_string(), hash).await.unwrap());
    }
}
