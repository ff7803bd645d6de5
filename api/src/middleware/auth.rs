use axum::{
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Authentication middleware that validates bearer JWT tokens against
/// the configured issuer, audience and signing key. Rejected requests
/// never reach the data-access layer.
#[tracing::instrument(skip(state, req, next))]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // Check if it's a Bearer token
    if !auth_header.starts_with("Bearer ") {
        tracing::warn!("Invalid authorization header format");
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = &auth_header[7..]; // Skip "Bearer "

    let claims = state.jwt.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Failed to validate bearer token");
        StatusCode::UNAUTHORIZED
    })?;

    // Insert claims into request extensions for use by handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
