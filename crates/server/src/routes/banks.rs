use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::Bank;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/banks", tag = "banks",
    responses((status = 200, description = "All banks in insertion order", body = [crate::openapi::BankDoc]))
)]
pub async fn get_banks(State(state): State<ServerState>) -> Json<Vec<Bank>> {
    let banks = state.bank_svc.get_banks().await;
    info!(count = banks.len(), "list banks");
    Json(banks)
}

#[utoipa::path(
    get, path = "/api/banks/{account_number}", tag = "banks",
    params(("account_number" = String, Path, description = "Account number of the bank")),
    responses(
        (status = 200, description = "Bank found", body = crate::openapi::BankDoc),
        (status = 404, description = "No bank with this account number")
    )
)]
pub async fn get_bank(
    State(state): State<ServerState>,
    Path(account_number): Path<String>,
) -> Result<Json<Bank>, JsonApiError> {
    let bank = state.bank_svc.get_bank(&account_number).await?;
    Ok(Json(bank))
}

#[utoipa::path(
    post, path = "/api/banks", tag = "banks",
    request_body = crate::openapi::BankDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BankDoc),
        (status = 400, description = "Account number already taken")
    )
)]
pub async fn add_bank(
    State(state): State<ServerState>,
    Json(bank): Json<Bank>,
) -> Result<(StatusCode, Json<Bank>), JsonApiError> {
    let created = state.bank_svc.add_bank(bank).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch, path = "/api/banks", tag = "banks",
    request_body = crate::openapi::BankDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BankDoc),
        (status = 404, description = "No bank with this account number")
    )
)]
pub async fn update_bank(
    State(state): State<ServerState>,
    Json(bank): Json<Bank>,
) -> Result<Json<Bank>, JsonApiError> {
    let updated = state.bank_svc.update_bank(bank).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/banks/{account_number}", tag = "banks",
    params(("account_number" = String, Path, description = "Account number of the bank")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No bank with this account number")
    )
)]
pub async fn delete_bank(
    State(state): State<ServerState>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.bank_svc.delete_bank(&account_number).await?;
    Ok(StatusCode::NO_CONTENT)
}
