use axum::{extract::State, Json};

use crate::radiants::Radiant;
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/radiants",
    tag = "gallery",
    responses(
        (status = 200, description = "Radiant catalog in file order", body = Vec<Radiant>)
    )
)]
pub async fn list_radiants(State(state): State<AppState>) -> Json<Vec<Radiant>> {
    Json(state.radiants.iter().cloned().collect())
}
