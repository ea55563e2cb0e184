use axum::http::Uri;

use crate::errors::AppError;

// Unknown /api/* paths answer in JSON instead of falling through to static files.
pub async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
