use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::{error::Error as StdError, fmt};

use crate::services::auth::claims::ClaimSet;

// Errors returned by signature + expiry verification.
#[derive(Debug)]
pub enum TokenError {
    Empty,
    Jwt(jsonwebtoken::errors::Error),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "token is empty"),
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
        }
    }
}

impl StdError for TokenError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// HMAC (shared-secret) token verifier bound to a single secret.
///
/// - Only `HS256` / `HS384` / `HS512` headers are accepted. `none` and asymmetric
///   algorithms fail before the signature is looked at.
/// - `exp` is required and checked with `leeway_seconds` of tolerance.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenValidator")
            .field("algorithms", &self.validation.algorithms)
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

impl TokenValidator {
    pub fn new(secret: &[u8], leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        // upstream issuer sets no audience
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify signature and expiry, then decode the fixed-shape claim set.
    pub fn validate(&self, token: &str) -> Result<ClaimSet, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let data = jsonwebtoken::decode::<ClaimSet>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}
