use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bramon::Station;
use crate::web::error::{ErrorResponse, WebResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct StationsResponse {
    pub stations: Vec<Station>,
}

#[utoipa::path(
    get,
    path = "/api/stations",
    tag = "gallery",
    responses(
        (status = 200, description = "All stations visible to the configured API key", body = StationsResponse),
        (status = 502, description = "BRAMON API unavailable", body = ErrorResponse)
    )
)]
pub async fn list_stations(State(state): State<AppState>) -> WebResult<Json<StationsResponse>> {
    let stations = state.client.fetch_stations().await?;
    Ok(Json(StationsResponse { stations }))
}
