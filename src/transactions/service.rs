use axum::http::StatusCode;
use sqlx::PgPool;

use crate::app::models::api_error::ApiError;

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto, edit_transaction_dto::EditTransactionDto,
    },
    errors::TransactionsApiError,
    models::transaction::Transaction,
};

pub async fn get_transactions(pool: &PgPool) -> Result<Vec<Transaction>, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT id, description, amount, type, created_at
        FROM transactions
        ORDER BY created_at DESC
        ",
    )
    .fetch_all(pool)
    .await;

    match sqlx_result {
        Ok(transactions) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        INSERT INTO transactions (description, amount, type)
        VALUES ($1, $2, $3)
        RETURNING id, description, amount, type, created_at
        ",
    )
    .bind(&dto.description)
    .bind(&dto.amount)
    .bind(&dto.kind)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => Ok(transaction),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

pub async fn get_transaction_by_id(id: i32, pool: &PgPool) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT id, description, amount, type, created_at
        FROM transactions
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

pub async fn edit_transaction_by_id(
    id: i32,
    dto: &EditTransactionDto,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        UPDATE transactions
        SET description = $1, amount = $2, type = $3
        WHERE id = $4
        ",
    )
    .bind(&dto.description)
    .bind(&dto.amount)
    .bind(&dto.kind)
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}

pub async fn delete_transaction_by_id(id: i32, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM transactions
        WHERE id = $1
        ",
    )
    .bind(id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}
