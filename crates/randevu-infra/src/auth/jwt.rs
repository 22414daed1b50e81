//! JWT token service implementation.
//!
//! Tokens are signed with HMAC-SHA-512 over a key decoded from a
//! base64-encoded configured secret. The payload carries only the subject
//! and the issued-at/expiry timestamps; the expiry is the issue time plus a
//! configured millisecond lifetime.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use randevu_core::ports::{AuthError, TokenClaims, TokenService};

const DEFAULT_SECRET_B64: &str =
    "cmFuZGV2dS1kZXYtc2VjcmV0LWNoYW5nZS1tZS1yYW5kZXZ1LWRldi1zZWNyZXQtY2hhbmdlLW1lLXJhbmRldnUtZGV2LXNlY3JldA==";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Base64-encoded signing secret.
    pub secret: String,
    /// Token lifetime in milliseconds.
    pub expiration_millis: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET_B64.to_string(),
            expiration_millis: 86_400_000,
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        // Derive the key once. An unparseable secret falls back to the raw
        // bytes so a misconfigured service still starts, loudly.
        let key_bytes = match BASE64.decode(config.secret.as_bytes()) {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!("JWT_SECRET is not valid base64; using raw bytes as signing key");
                config.secret.as_bytes().to_vec()
            }
        };

        Self {
            encoding_key: EncodingKey::from_secret(&key_bytes),
            decoding_key: DecodingKey::from_secret(&key_bytes),
            config,
        }
    }
}

impl JwtConfig {
    /// Whether the config still carries the built-in development secret.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET_B64
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::milliseconds(self.config.expiration_millis);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })?;

        Ok(TokenClaims {
            subject: token_data.claims.sub,
            issued_at: token_data.claims.iat,
            expires_at: token_data.claims.exp,
        })
    }

    fn lifetime_millis(&self) -> i64 {
        self.config.expiration_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: BASE64.encode("test-secret-key-test-secret-key-test-secret-key-test-secret-key"),
            expiration_millis: 3_600_000,
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let service = JwtTokenService::new(test_config());

        let token = service.issue("ayse").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.subject, "ayse");
        assert!(claims.expires_at > claims.issued_at);
    }

    #[test]
    fn expiry_is_issue_time_plus_lifetime() {
        let service = JwtTokenService::new(test_config());

        let token = service.issue("ayse").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.expires_at - claims.issued_at, 3_600);
    }

    #[test]
    fn malformed_token_is_rejected() {
        let service = JwtTokenService::new(test_config());

        let result = service.verify("not-a-token");

        assert!(matches!(result, Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = JwtTokenService::new(test_config());
        let other = JwtTokenService::new(JwtConfig {
            secret: BASE64.encode("a-completely-different-secret-key-of-sufficient-length!!"),
            expiration_millis: 3_600_000,
        });

        let token = other.issue("ayse").unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_millis: -1_000,
            ..test_config()
        });

        let token = service.issue("ayse").unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn non_base64_secret_falls_back_to_raw_bytes() {
        let service = JwtTokenService::new(JwtConfig {
            secret: "not base64 at all!!!".to_string(),
            expiration_millis: 3_600_000,
        });

        let token = service.issue("ayse").unwrap();
        assert_eq!(service.verify(&token).unwrap().subject, "ayse");
    }
}
