use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::{
    middleware::request_id::RequestId,
    ui::{Controller, Page},
};

#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub title: String,
}

/// Keystroke in the search box; suggestions land in the page after the debounce
pub async fn input(
    State(controller): State<Controller>,
    Json(request): Json<InputRequest>,
) -> StatusCode {
    // The debounced lookup runs detached
    drop(controller.input(&request.text).await);
    StatusCode::ACCEPTED
}

/// Handler for search form submission
pub async fn submit(
    State(controller): State<Controller>,
    Extension(request_id): Extension<RequestId>,
) -> Json<Page> {
    let started = controller.submit().await;

    tracing::info!(
        request_id = %request_id,
        searched = started.is_some(),
        posters = started.as_ref().map_or(0, |e| e.len()),
        "Search submitted"
    );

    Json(controller.page().await)
}

pub async fn select(
    State(controller): State<Controller>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SelectRequest>,
) -> Json<Page> {
    tracing::info!(request_id = %request_id, title = %request.title, "Suggestion selected");
    controller.select_suggestion(&request.title).await;
    Json(controller.page().await)
}

pub async fn toggle(State(controller): State<Controller>) -> Json<Page> {
    controller.toggle_search().await;
    Json(controller.page().await)
}

pub async fn focus(State(controller): State<Controller>) -> Json<Page> {
    controller.focus_search().await;
    Json(controller.page().await)
}

/// Click outside the search box
pub async fn blur(State(controller): State<Controller>) -> Json<Page> {
    controller.click_outside().await;
    Json(controller.page().await)
}
