//! Unified error handling for the pharmacy API.
//!
//! All fallible operations in the crate return [`Result`]. Core modules map
//! database and validation failures into [`Error`]; the web layer converts the
//! same enum into HTTP responses, so handlers can use `?` throughout.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

/// Crate-wide error type.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration or input shape problem described by a message
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Connection-level failure from the `SQLite` driver
    #[error("Database driver error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Filesystem failure (upload storage, seed file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced row does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. "Order" or "Product"
        entity: &'static str,
        /// Primary key that was looked up
        id: i64,
    },

    /// A currency amount was negative, NaN, or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A line-item quantity was not a positive integer
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i32,
    },

    /// Malformed multipart body on upload
    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Upload request carried no `file` part
    #[error("No file provided")]
    MissingFile,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                json!({"error": format!("{entity} {id} not found")}),
            ),
            Self::Config { message } => {
                (StatusCode::BAD_REQUEST, json!({"error": message}))
            }
            Self::InvalidAmount { .. }
            | Self::InvalidQuantity { .. }
            | Self::Multipart(_) => {
                (StatusCode::BAD_REQUEST, json!({"error": self.to_string()}))
            }
            Self::MissingFile => {
                (StatusCode::BAD_REQUEST, json!({"error": "No file provided"}))
            }
            Self::Database(_) | Self::Sqlx(_) | Self::Io(_) => {
                // Internal detail goes to the log, not the client
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
