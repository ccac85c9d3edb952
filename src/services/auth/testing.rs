//! Token minting helpers for tests. Issuance belongs to the upstream auth service,
//! so nothing outside `#[cfg(test)]` signs tokens.
use jsonwebtoken::{Algorithm, EncodingKey, Header};

pub const USER_SECRET: &str = "test-user-secret";
pub const SERVICE_SECRET: &str = "test-service-secret";

pub fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

pub fn mint(secret: &str, claims: &serde_json::Value) -> String {
    mint_with(Algorithm::HS256, secret, claims)
}

pub fn mint_with(alg: Algorithm, secret: &str, claims: &serde_json::Value) -> String {
    let mut header = Header::new(alg);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .expect("sign test token")
}

pub fn service_token() -> String {
    mint(
        SERVICE_SECRET,
        &serde_json::json!({
            "role": "service",
            "service_name": "auth-service",
            "token_type": "service_token",
            "sub": "auth-service",
            "iat": now(),
            "exp": now() + 300,
        }),
    )
}

pub fn access_token(user_id: i64) -> String {
    mint(
        USER_SECRET,
        &serde_json::json!({
            "role": "USER",
            "email": format!("user{user_id}@example.com"),
            "token_type": "access",
            "user_id": user_id,
            "sub": format!("user{user_id}"),
            "iat": now(),
            "exp": now() + 300,
        }),
    )
}
