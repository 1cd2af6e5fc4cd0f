// src/utils/jwt.rs

use crate::domain::user_model::UserClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use uuid::Uuid;

/// JWT関連のエラー
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Failed to encode JWT: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to decode JWT: {0}")]
    DecodingError(String),

    #[error("JWT token has expired")]
    TokenExpired,

    #[error("Missing JWT secret key")]
    MissingSecretKey,

    #[error("Invalid JWT configuration: {0}")]
    ConfigurationError(String),
}

/// アクセストークンのClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessTokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// JWT ID
    pub jti: String,
    /// User information
    pub user: UserClaims,
}

/// JWT設定
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT秘密鍵
    pub secret_key: String,
    /// アクセストークンの有効期限（分）
    pub access_token_expiry_minutes: i64,
    /// 発行者
    pub issuer: String,
    /// 対象者
    pub audience: String,
}

impl JwtConfig {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Result<Self, JwtError> {
        let secret_key = env::var("JWT_SECRET_KEY").map_err(|_| JwtError::MissingSecretKey)?;

        let access_token_expiry_minutes = env::var("JWT_ACCESS_TOKEN_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .map_err(|_| JwtError::ConfigurationError("Invalid access token expiry".to_string()))?;

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "biomss-backend".to_string());

        let audience =
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| "biomss-backend-users".to_string());

        Ok(Self {
            secret_key,
            access_token_expiry_minutes,
            issuer,
            audience,
        })
    }

    /// 秘密鍵の検証
    pub fn validate(&self) -> Result<(), JwtError> {
        if self.secret_key.len() < 32 {
            return Err(JwtError::ConfigurationError(
                "JWT secret key must be at least 32 characters".to_string(),
            ));
        }

        if self.access_token_expiry_minutes <= 0 {
            return Err(JwtError::ConfigurationError(
                "Access token expiry must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// JWTの発行と検証を担うマネージャー
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Result<Self, JwtError> {
        config.validate()?;
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
        })
    }

    /// アクセストークンを生成
    pub fn generate_access_token(&self, user: UserClaims) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.config.access_token_expiry_minutes);

        let claims = AccessTokenClaims {
            sub: user.user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            jti: Uuid::new_v4().to_string(),
            user,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// アクセストークンを検証してClaimsを取り出す
    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::DecodingError(e.to_string()),
            },
        )?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::UserRole;

    fn test_manager(expiry_minutes: i64) -> JwtManager {
        JwtManager::new(JwtConfig {
            secret_key: "test-secret-key-that-is-long-enough-0123".to_string(),
            access_token_expiry_minutes: expiry_minutes,
            issuer: "biomss-backend".to_string(),
            audience: "biomss-backend-users".to_string(),
        })
        .unwrap()
    }

    fn test_claims() -> UserClaims {
        UserClaims {
            user_id: Uuid::new_v4(),
            username: "kofi.mensah".to_string(),
            role: UserRole::ItOfficer,
            branch_id: None,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let manager = test_manager(60);
        let claims = test_claims();

        let token = manager.generate_access_token(claims.clone()).unwrap();
        let decoded = manager.verify_access_token(&token).unwrap();

        assert_eq!(decoded.user.user_id, claims.user_id);
        assert_eq!(decoded.user.username, claims.username);
        assert_eq!(decoded.user.role, UserRole::ItOfficer);
        assert_eq!(decoded.sub, claims.user_id.to_string());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let manager = test_manager(60);
        let token = manager.generate_access_token(test_claims()).unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(manager.verify_access_token(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = test_manager(60);
        let token = manager.generate_access_token(test_claims()).unwrap();

        let other = JwtManager::new(JwtConfig {
            secret_key: "another-secret-key-that-is-long-enough-1".to_string(),
            access_token_expiry_minutes: 60,
            issuer: "biomss-backend".to_string(),
            audience: "biomss-backend-users".to_string(),
        })
        .unwrap();

        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = JwtManager::new(JwtConfig {
            secret_key: "short".to_string(),
            access_token_expiry_minutes: 60,
            issuer: "biomss-backend".to_string(),
            audience: "biomss-backend-users".to_string(),
        });
        assert!(result.is_err());
    }
}
