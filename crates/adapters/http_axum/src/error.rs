//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use statusboard_domain::error::StatusBoardError;

use crate::session::SessionError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`StatusBoardError`] to a JSON response with appropriate status code.
pub struct ApiError(StatusBoardError);

impl From<StatusBoardError> for ApiError {
    fn from(err: StatusBoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            StatusBoardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            StatusBoardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            StatusBoardError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Errors raised by the HTML pages and redirect routes, answered as plain text.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Service(#[from] StatusBoardError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("template rendering failed")]
    Render(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Service(StatusBoardError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            Self::Service(StatusBoardError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Unknown location.").into_response()
            }
            Self::Service(StatusBoardError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                internal_error()
            }
            Self::Session(err) => {
                tracing::error!(error = %err, "session error");
                internal_error()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "template error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use statusboard_domain::error::{NotFoundError, ValidationError};

    async fn body_of(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_answer_bad_request_with_fixed_text_for_invalid_color() {
        let err = PageError::from(StatusBoardError::from(
            ValidationError::InvalidStatusColor("Blue".to_string()),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Invalid color status.");
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_location() {
        let err = PageError::from(StatusBoardError::from(NotFoundError {
            entity: "Location",
            id: "9".to_string(),
        }));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, "Unknown location.");
    }

    #[tokio::test]
    async fn should_hide_storage_details_from_page_clients() {
        let err = PageError::from(StatusBoardError::Storage("disk on fire".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_of(response).await.contains("disk"));
    }

    #[tokio::test]
    async fn should_hide_storage_details_from_api_clients() {
        let err = ApiError::from(StatusBoardError::Storage("disk on fire".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            r#"{"error":"internal server error"}"#
        );
    }
}
