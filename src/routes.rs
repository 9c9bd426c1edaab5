//! HTTP router.

use crate::{handlers, middleware, state::AppState};
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// # Routes
///
/// | Method | Path | Auth |
/// |---|---|---|
/// | GET, POST | /account | none |
/// | GET, DELETE | /account/{id} | bearer token |
/// | POST | /login | none |
/// | POST | /transfer | none |
pub fn router(state: AppState) -> Router {
    // Routes that require a valid bearer token
    let authenticated_routes = Router::new()
        .route(
            "/account/{id}",
            get(handlers::accounts::get_account).delete(handlers::accounts::delete_account),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route(
            "/account",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route("/login", post(handlers::auth::login))
        .route("/transfer", post(handlers::transfers::create_transfer))
        .merge(authenticated_routes)
        // Must come after every route so each method router gets it
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
