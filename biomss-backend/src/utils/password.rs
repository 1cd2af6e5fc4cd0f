// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("Password verification failed")]
    VerificationFailed,

    #[error("Weak password: {0}")]
    WeakPassword(String),
}

/// パスワード強度の基本チェック
///
/// 長さの上限・下限に加えて、大文字・小文字・数字を最低1つずつ要求する。
pub fn check_password_strength(password: &str) -> Result<(), PasswordError> {
    if password.len() < 8 {
        return Err(PasswordError::WeakPassword(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if password.len() > 128 {
        return Err(PasswordError::WeakPassword(
            "Password must be 128 characters or less".to_string(),
        ));
    }

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_lowercase || !has_uppercase || !has_digit {
        return Err(PasswordError::WeakPassword(
            "Password must contain at least one lowercase letter, one uppercase letter, and one digit"
                .to_string(),
        ));
    }

    Ok(())
}

/// Argon2でパスワードをハッシュ化
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingError(e.to_string()))?;
    Ok(hash.to_string())
}

/// パスワードとハッシュを照合
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), PasswordError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| PasswordError::HashingError(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Gh@na2026Secure").unwrap();
        assert!(verify_password("Gh@na2026Secure", &hash).is_ok());
        assert!(verify_password("wrong-password", &hash).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("Gh@na2026Secure").unwrap();
        let b = hash_password("Gh@na2026Secure").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_strength_checks() {
        assert!(check_password_strength("Abcdef12").is_ok());
        assert!(check_password_strength("short1A").is_err());
        assert!(check_password_strength("alllowercase1").is_err());
        assert!(check_password_strength("ALLUPPERCASE1").is_err());
        assert!(check_password_strength("NoDigitsHere").is_err());
    }
}
