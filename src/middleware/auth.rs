use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;
use crate::state::AppState;

/// Gates every payment route behind the shared-secret `api_key` header.
/// Comparison is exact string equality against the configured secret; the
/// supplied value is never logged.
pub async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let supplied = headers
        .get("api_key")
        .and_then(|header| header.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    if supplied != state.config.api_key {
        return Err(AppError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
