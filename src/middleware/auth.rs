use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::startup::AppState;

/// Header carrying the caller-supplied auth token.
pub const AUTH_HEADER: &str = "X-Custom-Auth";

/// Constant-time token comparison. Semantics are exact string equality.
fn token_matches(presented: &str, expected: &str) -> bool {
    let presented = presented.as_bytes();
    let expected = expected.as_bytes();

    if presented.len() != expected.len() {
        return false;
    }

    presented.ct_eq(expected).into()
}

/// Middleware requiring a valid `X-Custom-Auth` header.
///
/// Missing, unreadable, or mismatching tokens all collapse to the same 403.
pub async fn auth_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    match token {
        Some(token) if token_matches(token, &state.config.auth.key) => Ok(next.run(req).await),
        _ => Err(AppError::Forbidden),
    }
}
