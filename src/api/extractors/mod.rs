mod account_id;
mod auth_ctx;

pub use account_id::AccountId;
pub use auth_ctx::Authenticated;
