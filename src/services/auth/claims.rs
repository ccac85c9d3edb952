/*
 * Responsibility
 * - 検証済みトークンの payload (ClaimSet) の型
 * - token_type / role の組み合わせで、どちらの gate が受け入れるかを決める (TokenClass)
 *
 * Notes
 * - ClaimSet は TokenValidator が署名検証に成功した時だけ decode される
 * - フィールドは private。外から組み立てる手段は持たせない
 */
use serde::Deserialize;

pub const ACCESS_TOKEN_TYPE: &str = "access";
pub const SERVICE_TOKEN_TYPE: &str = "service_token";
pub const SERVICE_ROLE: &str = "service";

/// Decoded payload of a verified token.
///
/// `role`, `token_type` and `exp` are required; decode fails without them.
/// `user_id` is absent on service tokens and defaults to 0.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimSet {
    #[serde(rename = "user_id", default)]
    subject_id: i64,
    role: String,
    token_type: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    service_name: Option<String>,
    exp: u64,
    #[serde(default)]
    iat: Option<u64>,
}

impl ClaimSet {
    pub fn subject_id(&self) -> i64 {
        self.subject_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    pub fn expires_at(&self) -> u64 {
        self.exp
    }

    pub fn issued_at(&self) -> Option<u64> {
        self.iat
    }
}

/// Which token family a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Machine-to-machine token minted by the upstream auth service.
    Service,
    /// End-user access token.
    UserAccess,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::UserAccess => "user_access",
        }
    }

    /// Claim-level check, applied after the signature has already been verified
    /// with the secret belonging to this class.
    pub fn admits(&self, claims: &ClaimSet) -> bool {
        match self {
            Self::Service => {
                claims.token_type == SERVICE_TOKEN_TYPE && claims.role == SERVICE_ROLE
            }
            Self::UserAccess => claims.token_type == ACCESS_TOKEN_TYPE,
        }
    }
}
