use axum::{
    extract::{RawQuery, State},
    response::Html,
};

use crate::query::QueryParams;
use crate::web::error::WebResult;
use crate::web::state::AppState;

use super::render::{render_captures, render_station_form};
use super::templates::PageTemplate;

fn query_params(raw: Option<String>) -> QueryParams {
    raw.as_deref().map(QueryParams::parse).unwrap_or_default()
}

pub async fn index(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> WebResult<PageTemplate> {
    let query = query_params(raw);

    let filter =
        render_station_form(&state.client, &state.radiants, &query, &state.config.labels).await?;
    let gallery = render_captures(&state.client, &query, &state.config).await?;

    Ok(PageTemplate { filter, gallery })
}

pub async fn stations(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> WebResult<Html<String>> {
    let query = query_params(raw);
    let html =
        render_station_form(&state.client, &state.radiants, &query, &state.config.labels).await?;
    Ok(Html(html))
}

pub async fn captures(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> WebResult<Html<String>> {
    let query = query_params(raw);
    let html = render_captures(&state.client, &query, &state.config).await?;
    Ok(Html(html))
}
