use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    TransactionNotFound,
    InvalidTransactionId,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TransactionNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transaction not found.".to_string(),
            },
            Self::InvalidTransactionId => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid transaction id.".to_string(),
            },
        }
    }
}
