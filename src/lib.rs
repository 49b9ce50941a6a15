pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod startup;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{health::health_check, remedy::remedy};
use crate::middleware::{auth::auth_middleware, cors::cors_middleware};
use crate::startup::AppState;

/// Assemble the application router.
///
/// The remedy handler answers the root route and acts as the fallback, so
/// every path behaves the same. `/health` is the single unauthenticated
/// exception, for liveness probes. The CORS middleware is outermost: it
/// answers preflights before auth runs and stamps headers on every response.
pub fn app_router(state: AppState) -> Router {
    let remedy_routes = Router::new()
        .route("/", get(remedy).post(remedy))
        .fallback(remedy)
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .merge(remedy_routes)
        .layer(from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
