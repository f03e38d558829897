use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    ui::Controller,
};

pub mod browse;
pub mod modal;
pub mod page;
pub mod search;

/// Creates the application router with all routes
pub fn create_router(controller: Controller) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(controller)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Controller> {
    Router::new()
        .route("/page", get(page::get_page))
        .route("/home", post(page::go_home))
        .route("/model", post(page::set_model))
        .route("/tilt", get(page::tilt))
        .route("/search/input", post(search::input))
        .route("/search/submit", post(search::submit))
        .route("/search/select", post(search::select))
        .route("/search/toggle", post(search::toggle))
        .route("/search/focus", post(search::focus))
        .route("/search/blur", post(search::blur))
        .route("/genres/:genre", post(browse::genre))
        .route("/cards/:index/open", post(modal::open))
        .route("/modal/close", post(modal::close))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
