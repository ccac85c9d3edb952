use crate::services::auth::{
    claims::{ClaimSet, TokenClass},
    error::AuthError,
    validator::TokenValidator,
};

/// Holds one validator per token family.
///
/// The two secrets are disjoint, so a token signed for one family can never
/// verify under the other regardless of what its claims say.
#[derive(Debug, Clone)]
pub struct AuthGate {
    user: TokenValidator,
    service: TokenValidator,
}

impl AuthGate {
    pub fn new(user_secret: &str, service_secret: &str, leeway_seconds: u64) -> Self {
        Self {
            user: TokenValidator::new(user_secret.as_bytes(), leeway_seconds),
            service: TokenValidator::new(service_secret.as_bytes(), leeway_seconds),
        }
    }

    fn validator(&self, class: TokenClass) -> &TokenValidator {
        match class {
            TokenClass::Service => &self.service,
            TokenClass::UserAccess => &self.user,
        }
    }

    /// Verify `token` with the validator for `class`, then require the claims to
    /// match that class.
    fn authenticate(&self, class: TokenClass, token: &str) -> Result<ClaimSet, AuthError> {
        let claims = self.validator(class).validate(token)?;

        if !class.admits(&claims) {
            return Err(AuthError::WrongTokenClass {
                expected: class.as_str(),
                token_type: claims.token_type().to_string(),
                role: claims.role().to_string(),
            });
        }

        Ok(claims)
    }

    pub fn authenticate_service(&self, token: &str) -> Result<ClaimSet, AuthError> {
        self.authenticate(TokenClass::Service, token)
    }

    pub fn authenticate_user(&self, token: &str) -> Result<ClaimSet, AuthError> {
        self.authenticate(TokenClass::UserAccess, token)
    }
}

/// Ownership rule for account mutations: the caller's `user_id` must equal the
/// account id from the path.
///
/// `claims` is `None` when nothing upstream attached a verified claim set; that
/// is an authentication gap, not a server error.
pub fn ensure_owner(claims: Option<&ClaimSet>, resource_id: i64) -> Result<(), AuthError> {
    let claims = claims.ok_or(AuthError::MissingClaims)?;

    if claims.subject_id() != resource_id {
        return Err(AuthError::NotOwner {
            subject_id: claims.subject_id(),
            resource_id,
        });
    }

    Ok(())
}
