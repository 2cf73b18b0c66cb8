use utoipa::OpenApi;

use super::api::captures::CapturesResponse;
use super::api::stations::StationsResponse;
use super::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::stations::list_stations,
        super::api::captures::list_captures,
        super::api::radiants::list_radiants,
    ),
    components(
        schemas(
            StationsResponse,
            CapturesResponse,
            ErrorResponse,
            crate::bramon::Station,
            crate::gallery::GalleryEntry,
            crate::gallery::Pagination,
            crate::gallery::PageLink,
            crate::gallery::PageLinkKind,
            crate::radiants::Radiant,
        )
    ),
    info(
        title = "BRAMON Gallery API",
        description = "Read-only view of BRAMON stations, captures and radiants",
        version = "0.1.0"
    ),
    tags(
        (name = "gallery", description = "Stations, captures and radiants")
    )
)]
pub struct ApiDoc;
