//! Bearer トークン検証 → ClaimSet を extensions に入れる
//!
//! - `require_service_token`: 上流 auth-service の service token のみ通す
//! - `require_user_token`: ユーザーの access token のみ通す
//!
//! 失敗時はここで 401 を返し、handler / repo は一切実行されない。
//!
//! 例：
//! ```ignore
//! let create = post(create_account)
//!     .route_layer(middleware::from_fn_with_state(state.clone(), access::require_service_token));
//! ```

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::error::AppError;
use crate::middleware::bearer_auth;
use crate::services::auth::{AuthError, ClaimSet, claims::TokenClass};
use crate::state::AppState;

pub async fn require_service_token(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, TokenClass::Service, req, next).await
}

pub async fn require_user_token(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, TokenClass::UserAccess, req, next).await
}

async fn gate(
    state: &AppState,
    class: TokenClass,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match authenticate(state, class, &req) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                error = %err,
                required = class.as_str(),
                method = %req.method(),
                path = %req.uri().path(),
                "request rejected by auth gate"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(
        subject_id = claims.subject_id(),
        subject = claims.subject().unwrap_or("-"),
        token_type = claims.token_type(),
        issued_at = claims.issued_at(),
        expires_at = claims.expires_at(),
        "request authenticated"
    );

    // middleware → extractor への受け渡し (このリクエスト限り)
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn authenticate(
    state: &AppState,
    class: TokenClass,
    req: &Request<Body>,
) -> Result<ClaimSet, AuthError> {
    let token = bearer_auth::extract(req.headers())?;
    match class {
        TokenClass::Service => state.auth.authenticate_service(token),
        TokenClass::UserAccess => state.auth.authenticate_user(token),
    }
}
