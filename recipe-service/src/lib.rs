pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::services::RecipeStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes API",
        version = "1.0.0",
        description = "This is a sample recipes api."
    ),
    paths(
        handlers::health::health_check,
        handlers::recipes::list_recipes,
        handlers::recipes::get_recipe,
        handlers::recipes::create_recipe,
        handlers::recipes::update_recipe,
        handlers::recipes::delete_recipe,
    ),
    components(
        schemas(
            dtos::Recipe,
            dtos::RecipeRequest,
            dtos::Message,
        )
    ),
    tags(
        (name = "Recipes", description = "Recipe management"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Per-request state. The store handle is built once at startup and shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState, swagger_enabled: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics::metrics));

    if swagger_enabled {
        app = app.merge(
            SwaggerUi::new("/swagger").url("/.well-known/openapi.json", ApiDoc::openapi()),
        );
    } else {
        // Keep the machine-readable description available without the UI.
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    app.route(
        "/recipes",
        get(handlers::list_recipes).post(handlers::create_recipe),
    )
    .route(
        "/recipes/:id",
        get(handlers::get_recipe)
            .put(handlers::update_recipe)
            .delete(handlers::delete_recipe),
    )
    .fallback(handlers::not_found)
    .with_state(state)
    .layer(from_fn(metrics_middleware))
    .layer(TraceLayer::new_for_http().make_span_with(
        |request: &axum::http::Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            tracing::info_span!(
                "http_request",
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        },
    ))
    .layer(from_fn(request_id_middleware))
}
