use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    ui::{Controller, Page},
};

/// Handler for card clicks
pub async fn open(
    State(controller): State<Controller>,
    Extension(request_id): Extension<RequestId>,
    Path(index): Path<usize>,
) -> AppResult<Json<Page>> {
    if controller.open_card(index).await.is_none() {
        return Err(AppError::NotFound(format!("No card at index {}", index)));
    }

    tracing::info!(request_id = %request_id, index, "Card opened");

    Ok(Json(controller.page().await))
}

pub async fn close(State(controller): State<Controller>) -> Json<Page> {
    controller.close_modal().await;
    Json(controller.page().await)
}
