/*
 * Responsibility
 * - Authorization ヘッダから Bearer トークンを取り出す (暗号処理の前段)
 * - ヘッダ無し / "Bearer " で始まらない場合は即座に拒否
 */
use axum::http::{HeaderMap, header};

use crate::services::auth::AuthError;

pub fn extract(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingBearer)
}
