use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
    },
    errors::TransactionsApiError,
    models::transaction::Transaction,
    service,
};

pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    match service::get_transactions(&state.pool).await {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e),
    }
}

pub async fn create_transaction(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::create_transaction(&dto, &state.pool).await {
        Ok(transaction) => Ok((StatusCode::CREATED, Json(transaction))),
        Err(e) => Err(e),
    }
}

pub async fn get_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let Ok(id) = id.parse::<i32>()
    else {
        return Err(TransactionsApiError::InvalidTransactionId.value());
    };

    match service::get_transaction_by_id(id, &state.pool).await {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e),
    }
}

pub async fn edit_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonFromRequest(dto): JsonFromRequest<EditTransactionDto>,
) -> Result<String, ApiError> {
    let Ok(id) = id.parse::<i32>()
    else {
        return Err(TransactionsApiError::InvalidTransactionId.value());
    };

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::edit_transaction_by_id(id, &dto, &state.pool).await {
        Ok(_) => Ok(format!("Transaction {} updated successfully.", id)),
        Err(e) => Err(e),
    }
}

pub async fn delete_transaction_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    let Ok(id) = id.parse::<i32>()
    else {
        return Err(TransactionsApiError::InvalidTransactionId.value());
    };

    match service::delete_transaction_by_id(id, &state.pool).await {
        Ok(_) => Ok(format!("Transaction {} deleted successfully.", id)),
        Err(e) => Err(e),
    }
}
