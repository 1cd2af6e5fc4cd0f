// src/utils/validation.rs

//! 共通バリデーション定数とカスタムバリデーション関数
//!
//! DTOファイル間で重複するバリデーションルールを統一管理します。

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ユーザー名の制約
pub mod username {
    pub const MIN_LENGTH: u64 = 3;
    pub const MAX_LENGTH: u64 = 30;
}

/// チケット関連の制約
pub mod ticket {
    pub const TITLE_MIN_LENGTH: u64 = 1;
    pub const TITLE_MAX_LENGTH: u64 = 255;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 5000;
}

/// 支店・資産コードの制約
pub mod asset {
    pub const CODE_MAX_LENGTH: u64 = 20;
}

/// ユーザー名の正規表現パターン
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").expect("Invalid username regex"));

/// 支店コード・資産コードの正規表現パターン（例: ACC-001, ATM-ACC-01）
pub static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9-]*$").expect("Invalid code regex"));

/// IPv4/IPv6アドレスとして解釈できるかチェック
pub fn validate_ip_address(value: &str) -> Result<(), ValidationError> {
    if value.parse::<std::net::IpAddr>().is_err() {
        let mut error = ValidationError::new("invalid_ip_address");
        error.message = Some("Value is not a valid IP address".into());
        return Err(error);
    }
    Ok(())
}

/// ユーザー名の形式をバリデーション
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_REGEX.is_match(username) {
        return Err(ValidationError::new("invalid_username_format"));
    }
    Ok(())
}

/// 支店・資産コードの形式をバリデーション
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    if !CODE_REGEX.is_match(code) {
        let mut error = ValidationError::new("invalid_code_format");
        error.message =
            Some("Code must contain only uppercase letters, digits, and hyphens".into());
        return Err(error);
    }
    Ok(())
}

/// 文字列が空白のみでないかをチェック
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("empty_or_whitespace");
        error.message = Some("Field cannot be empty or contain only whitespace".into());
        return Err(error);
    }
    Ok(())
}

/// タイトル系フィールドのバリデーション
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    validate_not_empty_or_whitespace(title)?;

    if title.contains('\0') || title.contains('\r') || title.contains('\n') {
        let mut error = ValidationError::new("invalid_characters");
        error.message =
            Some("Title cannot contain null, carriage return, or newline characters".into());
        return Err(error);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("ama.owusu").is_ok());
        assert!(validate_username("tech_01").is_ok());
        assert!(validate_username("bad user").is_err());
        assert!(validate_username("bad!user").is_err());
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("ACC-001").is_ok());
        assert!(validate_code("ATM-KSI-12").is_ok());
        assert!(validate_code("acc-001").is_err());
        assert!(validate_code("-ACC").is_err());
    }

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_ip_address("10.12.4.7").is_ok());
        assert!(validate_ip_address("::1").is_ok());
        assert!(validate_ip_address("300.1.1.1").is_err());
        assert!(validate_ip_address("not-an-ip").is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("ATM offline at Accra Mall").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("line\nbreak").is_err());
    }
}
