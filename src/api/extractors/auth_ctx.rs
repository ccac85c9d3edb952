use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{AuthError, ClaimSet};

/// Handler で、検証済み ClaimSet を受け取るための extractor
/// auth gate が ClaimSet を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（gate がかかっていない・ミドルウェア未設定）
#[derive(Debug, Clone)]
pub struct Authenticated(pub ClaimSet);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ClaimSet>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                tracing::warn!("handler reached without verified claims");
                AuthError::MissingClaims.into()
            })
    }
}
