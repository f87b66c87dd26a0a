//! Configuration des routes pour l'application.

use axum::error_handling::HandleErrorLayer;
use axum::{routing::get, BoxError, Router};
use http::StatusCode;
use tower::timeout::error::Elapsed;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::handlers::account_number_exists;
use crate::consts::REQUEST_TIMEOUT;
use crate::utils::error_messages::{TIMEOUT_ERROR, VALIDATION_ERROR};

/// Initialisation du routeur principal et des middlewares
pub fn get_router() -> Router {
    // Le formulaire est servi depuis une autre origine en développement
    let router = if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        Router::new().merge(api_routes()).layer(cors)
    } else {
        Router::new().merge(api_routes())
    };

    let service = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e: BoxError| async move {
            if e.is::<Elapsed>() {
                (StatusCode::REQUEST_TIMEOUT, TIMEOUT_ERROR)
            } else {
                (StatusCode::BAD_REQUEST, VALIDATION_ERROR)
            }
        }))
        .timeout(REQUEST_TIMEOUT);

    router.layer(service)
}

/// Routes de l'API, préfixées par /api
fn api_routes() -> Router {
    Router::new().nest(
        "/api",
        Router::new().route(
            "/account/AccountNumberExists/:account_number",
            get(account_number_exists),
        ),
    )
}
