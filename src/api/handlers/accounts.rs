/*
 * Responsibility
 * - /account 系 CRUD handler
 * - 認証は route_layer の gate で済んでいる前提。ここでは所有者チェック (update/delete) のみ
 * - GET /account/{id} は所有者に限定しない (認証済みユーザーなら誰でも参照可)
 */
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::{
        dto::accounts::{
            AccountResponse, CreateAccountRequest, CreateAccountResponse, MessageResponse,
            UpdateAccountRequest,
        },
        extractors::{AccountId, Authenticated},
    },
    error::AppError,
    repos::account_repo::{AccountChanges, NewAccount},
    services::auth::ensure_owner,
    state::AppState,
};

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(v)| v)
        .map_err(|e| AppError::bad_request("INVALID_BODY", e.body_text()))
}

fn check_owner(claims: &Authenticated, id: i64) -> Result<(), AppError> {
    ensure_owner(Some(&claims.0), id).map_err(|err| {
        tracing::warn!(error = %err, "account ownership check failed");
        AppError::from(err)
    })
}

pub async fn create_account(
    State(state): State<AppState>,
    Authenticated(caller): Authenticated,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), AppError> {
    let req = parse_body(body)?;
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_ACCOUNT", msg))?;

    let id = state
        .accounts
        .create(NewAccount {
            username: &req.username,
            email: &req.email,
            password: &req.password,
        })
        .await?;

    tracing::info!(
        account_id = id,
        service = caller.service_name().unwrap_or("unknown"),
        request_id = req.request_id.as_deref().unwrap_or("-"),
        email_verified = req.email_verified,
        "account created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse {
            message: "user created successfully",
            id,
            username: req.username,
            email: req.email,
        }),
    ))
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let rows = state.accounts.list().await?;
    Ok(Json(rows.into_iter().map(AccountResponse::from).collect()))
}

pub async fn get_account(
    State(state): State<AppState>,
    AccountId(id): AccountId,
) -> Result<Json<AccountResponse>, AppError> {
    let row = state
        .accounts
        .get(id)
        .await?
        .ok_or(AppError::not_found("account"))?;

    Ok(Json(row.into()))
}

pub async fn update_account(
    State(state): State<AppState>,
    AccountId(id): AccountId,
    caller: Authenticated,
    body: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    check_owner(&caller, id)?;

    let req = parse_body(body)?;
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_ACCOUNT", msg))?;

    state
        .accounts
        .update(
            id,
            AccountChanges {
                username: &req.username,
                email: &req.email,
                password: req.password.as_deref(),
            },
        )
        .await?
        .ok_or(AppError::not_found("account"))?;

    Ok(Json(MessageResponse {
        message: "user updated successfully",
    }))
}

pub async fn delete_account(
    State(state): State<AppState>,
    AccountId(id): AccountId,
    caller: Authenticated,
) -> Result<StatusCode, AppError> {
    check_owner(&caller, id)?;

    if state.accounts.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("account"))
    }
}
