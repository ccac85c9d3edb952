use thiserror::Error;

use crate::services::auth::validator::TokenError;

/// Why a request was refused by the gate or by the ownership check.
///
/// Only `NotOwner` is surfaced differently to the caller (403); the rest all
/// become the same 401 so the response does not reveal which check failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing or malformed bearer credentials")]
    MissingBearer,

    #[error(transparent)]
    Invalid(#[from] TokenError),

    #[error("token is not a {expected} token (token_type={token_type}, role={role})")]
    WrongTokenClass {
        expected: &'static str,
        token_type: String,
        role: String,
    },

    #[error("no verified claims attached to request")]
    MissingClaims,

    #[error("subject {subject_id} does not own account {resource_id}")]
    NotOwner { subject_id: i64, resource_id: i64 },
}
