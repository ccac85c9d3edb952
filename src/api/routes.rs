/*
 * Responsibility
 * - URL 構造を定義
 * - どのルートにどの gate を掛けるかをここで決める (route_layer)
 *   - POST /account       : service token (上流 auth-service)
 *   - それ以外の /account : user access token
 */
use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers::accounts::{
    create_account, delete_account, get_account, list_accounts, update_account,
};
use crate::middleware::auth::access::{require_service_token, require_user_token};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let service_gate = middleware::from_fn_with_state(state.clone(), require_service_token);
    let user_gate = middleware::from_fn_with_state(state, require_user_token);

    let collection = post(create_account)
        .route_layer(service_gate)
        .merge(get(list_accounts).route_layer(user_gate.clone()));

    let item = get(get_account)
        .put(update_account)
        .delete(delete_account)
        .route_layer(user_gate);

    Router::new()
        .route("/account", collection)
        .route("/account/{id}", item)
}
