use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    middleware::request_id::RequestId,
    models::SortBy,
    ui::{Controller, Page},
};

#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub sort_by: SortBy,
}

/// Handler for genre pill clicks
pub async fn genre(
    State(controller): State<Controller>,
    Extension(request_id): Extension<RequestId>,
    Path(genre): Path<String>,
    Query(query): Query<BrowseQuery>,
) -> Json<Page> {
    let enrichment = controller.browse_genre(&genre, query.sort_by).await;

    tracing::info!(
        request_id = %request_id,
        genre = %genre,
        posters = enrichment.len(),
        "Genre browse rendered"
    );

    Json(controller.page().await)
}
