//! Route configuration.

use axum::{response::Redirect, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{health_routes, user_api_routes, user_page_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(|| async { Redirect::to("/users") }))
        // Health check
        .nest("/health", health_routes())
        // HTML pages
        .nest("/users", user_page_routes())
        // JSON API
        .nest("/api/users", user_api_routes());

    if state.config.swagger_enabled {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
