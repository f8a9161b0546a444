use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

pub const ENTITY_NAME: &str = "friends";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequestAlert {
        message: &'static str,
        error_key: &'static str,
    },
    #[error("Service returned an entity without an id.")]
    MissingGeneratedId,
    #[error("Database error: {0}.")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Invalid JSON body: {0}.")]
    JsonRejection(#[from] JsonRejection),
    #[error("Invalid request body: {0}.")]
    InvalidBody(#[from] ValidationErrors),
}

impl AppError {
    pub fn id_exists() -> Self {
        AppError::BadRequestAlert {
            message: "A new friends cannot already have an ID",
            error_key: "idexists",
        }
    }

    pub fn id_null() -> Self {
        AppError::BadRequestAlert {
            message: "Invalid id",
            error_key: "idnull",
        }
    }

    pub fn id_invalid() -> Self {
        AppError::BadRequestAlert {
            message: "Invalid ID",
            error_key: "idinvalid",
        }
    }

    pub fn id_not_found() -> Self {
        AppError::BadRequestAlert {
            message: "Entity not found",
            error_key: "idnotfound",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation failures carry the entity name and error key so clients
        // can key notifications off them; everything else gets a generic
        // client message with the detail logged server-side.
        if let AppError::BadRequestAlert { message, error_key } = self {
            let body = Json(json!({
                "error": {
                    "code": StatusCode::BAD_REQUEST.as_u16(),
                    "message": message,
                    "entityName": ENTITY_NAME,
                    "errorKey": error_key,
                }
            }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        let (status, client_message, internal_details) = match &self {
            AppError::BadRequestAlert { .. } => unreachable!(),
            AppError::MissingGeneratedId => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again later.",
                self.to_string(),
            ),
            AppError::DatabaseError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong. Please try again later.",
                format!("Database error: {}", e),
            ),
            AppError::InvalidBody(e) => (
                StatusCode::BAD_REQUEST,
                "Invalid form body.",
                format!("Invalid body provided (validation): {}.", e),
            ),
            AppError::JsonRejection(e) => match e {
                JsonRejection::MissingJsonContentType(_) => (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "Content-Type header must be application/json.",
                    e.to_string(),
                ),
                JsonRejection::JsonSyntaxError(_) => (
                    StatusCode::BAD_REQUEST,
                    "Malformed JSON in request body.",
                    e.to_string(),
                ),
                JsonRejection::JsonDataError(e) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Request body is valid JSON but has incorrect fields.",
                    format!("JSON deserialization error: {}", e),
                ),
                _ => (
                    StatusCode::BAD_REQUEST,
                    "Invalid JSON request.",
                    e.to_string(),
                ),
            },
        };

        if status.is_server_error() {
            tracing::error!("{}", internal_details);
        }

        let error_body = Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": client_message,
                "details": internal_details,
            }
        }));

        (status, error_body).into_response()
    }
}
