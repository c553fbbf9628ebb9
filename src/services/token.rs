use crate::error::{Error, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - user_id as string
    pub sub: String,
    /// Expiration time as Unix timestamp
    pub exp: i64,
    /// Issued at time as Unix timestamp
    pub iat: i64,
}

/// Issues and verifies signed bearer tokens.
///
/// Built once at startup from [`crate::config::AuthConfig`]; the signing
/// secret lives only inside the derived keys. Tokens are stateless: nothing
/// is stored per token and nothing can be revoked before expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            ttl,
        }
    }

    /// Signs a token for the given user, expiring `ttl` from now.
    ///
    /// # Example
    /// ```rust
    /// use userhub::services::token::TokenService;
    /// use chrono::Duration;
    /// use uuid::Uuid;
    ///
    /// let tokens = TokenService::new("my-secret", Duration::hours(6));
    /// let token = tokens.issue(Uuid::now_v7())?;
    /// assert!(token.contains('.'));
    /// # Ok::<(), userhub::error::Error>(())
    /// ```
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let expiration = now + self.ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Internal(format!("Failed to generate JWT: {}", e)))
    }

    /// Verifies signature and expiry and returns the token's subject.
    ///
    /// Stateless by design: the store is never consulted, so a token stays
    /// verifiable after its account is deactivated or deleted. Callers that
    /// need the current account state re-read the record afterwards (see
    /// `services::access`).
    ///
    /// # Errors
    /// [`Error::TokenExpired`] past the expiry timestamp (no leeway),
    /// [`Error::InvalidToken`] for any other defect: bad signature, garbage
    /// input, or a subject that is not a UUID.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            // Check error kind to distinguish expiry from everything else
            let error_msg = e.to_string().to_lowercase();
            if error_msg.contains("expired") {
                Error::TokenExpired
            } else {
                Error::InvalidToken
            }
        })?;

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| Error::InvalidToken)
    }
}
