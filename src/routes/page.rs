use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::ModelType,
    ui::{
        tilt::{PointerOnCard, Tilt},
        Controller, Page,
    },
};

#[derive(Debug, Deserialize)]
pub struct ModelRequest {
    pub model_type: ModelType,
}

#[derive(Debug, Serialize)]
pub struct TiltResponse {
    #[serde(flatten)]
    pub tilt: Tilt,
    pub transform: String,
}

/// Current page snapshot, polled by the shell
pub async fn get_page(State(controller): State<Controller>) -> Json<Page> {
    Json(controller.page().await)
}

pub async fn go_home(State(controller): State<Controller>) -> Json<Page> {
    controller.go_home().await;
    Json(controller.page().await)
}

pub async fn set_model(
    State(controller): State<Controller>,
    Json(request): Json<ModelRequest>,
) -> StatusCode {
    tracing::debug!(model = %request.model_type, "Model selected");
    controller.set_model(request.model_type).await;
    StatusCode::NO_CONTENT
}

pub async fn tilt(Query(pointer): Query<PointerOnCard>) -> Json<TiltResponse> {
    let tilt = Tilt::from_pointer(pointer);
    Json(TiltResponse {
        transform: tilt.css_transform(),
        tilt,
    })
}
