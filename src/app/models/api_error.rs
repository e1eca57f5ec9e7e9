use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, self.message).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError {
            code: StatusCode::BAD_REQUEST,
            message: rejection.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_as_plain_text_with_status() {
        let error = ApiError {
            code: StatusCode::NOT_FOUND,
            message: "Transaction not found.".to_string(),
        };

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(bytes.as_ref(), b"Transaction not found.");
    }
}
