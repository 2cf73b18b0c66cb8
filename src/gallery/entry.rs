use serde::Serialize;
use utoipa::ToSchema;

use crate::bramon::{Capture, CaptureFile};

pub const THUMBNAIL_SUFFIX: &str = "T.jpg";
pub const FULL_SIZE_SUFFIX: &str = "P.jpg";
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Last file whose name carries the thumbnail suffix.
pub fn select_thumbnail(files: &[CaptureFile]) -> Option<&CaptureFile> {
    files
        .iter()
        .rev()
        .find(|f| f.filename.ends_with(THUMBNAIL_SUFFIX))
}

/// The full-size image lives next to the thumbnail under the `P.jpg` suffix.
pub fn full_size_url(thumbnail_url: &str) -> String {
    thumbnail_url.replace(THUMBNAIL_SUFFIX, FULL_SIZE_SUFFIX)
}

/// A capture ready to be shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GalleryEntry {
    pub id: String,
    pub filename: String,
    pub thumbnail_url: String,
    pub full_url: String,
    pub classification: Option<String>,
    pub station: String,
    pub captured_at: String,
}

impl GalleryEntry {
    /// `None` when the capture has no thumbnail to show.
    pub fn from_capture(capture: &Capture) -> Option<Self> {
        let Some(thumbnail) = select_thumbnail(&capture.files) else {
            log::debug!("Skipping capture {}: no thumbnail file", capture.id);
            return None;
        };

        Some(GalleryEntry {
            id: capture.id.to_string(),
            filename: thumbnail.filename.clone(),
            thumbnail_url: thumbnail.url.clone(),
            full_url: full_size_url(&thumbnail.url),
            classification: capture.classification().map(String::from),
            station: capture.station.name.clone(),
            captured_at: capture.captured_at.format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}

pub fn build_entries(captures: &[Capture]) -> Vec<GalleryEntry> {
    captures.iter().filter_map(GalleryEntry::from_capture).collect()
}
