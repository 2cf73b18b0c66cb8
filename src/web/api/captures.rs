use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bramon::CaptureFilter;
use crate::gallery::{build_entries, GalleryEntry, Pagination};
use crate::query::QueryParams;
use crate::web::error::{ErrorResponse, WebResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CapturesResponse {
    pub items: Vec<GalleryEntry>,
    pub current_page: u32,
    pub last_page: u32,
    pub pagination: Pagination,
}

#[utoipa::path(
    get,
    path = "/api/captures",
    tag = "gallery",
    params(
        ("capture_date" = Option<String>, Query, description = "Capture date (YYYY-MM-DD)"),
        ("station[]" = Option<Vec<u64>>, Query, description = "Station ids, repeatable"),
        ("capture_radiant" = Option<String>, Query, description = "Radiant code"),
        ("capture_page" = Option<u32>, Query, description = "Page number, starting at 1"),
        ("capture_limit" = Option<u32>, Query, description = "Captures per page")
    ),
    responses(
        (status = 200, description = "One page of captures", body = CapturesResponse),
        (status = 502, description = "BRAMON API unavailable", body = ErrorResponse)
    )
)]
pub async fn list_captures(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> WebResult<Json<CapturesResponse>> {
    let query = raw.as_deref().map(QueryParams::parse).unwrap_or_default();
    let filter = CaptureFilter::from_query(&query, state.config.gallery.page_limit);

    let page = state.client.fetch_captures(&filter).await?;
    let pagination = Pagination::new(page.current_page, page.last_page, &query);

    Ok(Json(CapturesResponse {
        items: build_entries(&page.items),
        current_page: pagination.current_page,
        last_page: pagination.last_page,
        pagination,
    }))
}
