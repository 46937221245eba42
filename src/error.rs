use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Wire-level failures of the city routes.
///
/// Each variant maps to one exact status/body combination. The contract
/// is uneven: a database error surfaces as 500 on create but 400
/// everywhere else, the update route reuses "City Not Found" for its
/// catch-all, and the delete bodies carry no message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Create: a required field was missing or falsy.
    MissingFields,
    /// Create: the insert pipeline failed (including the empty-table
    /// next-ID lookup).
    CreateFailed,
    /// Get: no row matched the requested name.
    CityNotFound,
    /// Get: the lookup itself failed.
    LookupFailed,
    /// Update: no row matched the requested ID.
    NoCityFound,
    /// Update: bad ID or body, or the statement failed.
    UpdateFailed,
    /// Delete: no row matched the requested ID.
    NothingToDelete,
    /// Delete: bad ID or the statement failed.
    DeleteFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "success": false, "message": "You must fill all the fields!" }),
            ),
            ApiError::CreateFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "success": false, "message": "Error 500" }),
            ),
            ApiError::CityNotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "success": false, "message": "City Not Found" }),
            ),
            ApiError::LookupFailed => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "success": false, "message": "Not Found" }),
            ),
            ApiError::NoCityFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "success": false, "message": "No City Found" }),
            ),
            ApiError::UpdateFailed => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "success": false, "message": "City Not Found" }),
            ),
            ApiError::NothingToDelete => {
                (StatusCode::NOT_FOUND, serde_json::json!({ "success": false }))
            }
            ApiError::DeleteFailed => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "success": false }))
            }
        };
        (status, Json(body)).into_response()
    }
}
