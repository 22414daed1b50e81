//! Authentication ports.

/// Claims carried by an identity token. The payload is deliberately
/// minimal: a subject plus the issue/expiry timestamps.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Token service for issuing and verifying signed identity tokens.
///
/// Verification failures are expected, frequent conditions (expired or
/// tampered tokens), so they surface as `AuthError` values - implementations
/// must never panic on malformed input.
pub trait TokenService: Send + Sync {
    /// Issue a signed token for the given subject.
    fn issue(&self, subject: &str) -> Result<String, AuthError>;

    /// Verify a token and return its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Configured token lifetime in milliseconds.
    fn lifetime_millis(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
