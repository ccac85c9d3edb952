pub mod claims;
pub mod error;
pub mod gate;
#[cfg(test)]
pub mod testing;
pub mod validator;

pub use claims::ClaimSet;
pub use error::AuthError;
pub use gate::{AuthGate, ensure_owner};
