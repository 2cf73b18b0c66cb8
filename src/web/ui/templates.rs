use askama::Template;
use askama_web::WebTemplate;

use crate::web::config::Labels;

/// Full page: layout around the two pre-rendered fragments.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub filter: String,
    pub gallery: String,
}

pub struct StationOption {
    pub id: u64,
    pub name: String,
    pub checked: bool,
}

pub struct RadiantOption {
    pub code: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "station_filter.html")]
pub struct StationFilterTemplate<'a> {
    pub stations: Vec<StationOption>,
    pub radiants: Vec<RadiantOption>,
    pub capture_date: &'a str,
    pub unavailable: bool,
    pub labels: &'a Labels,
}

pub struct EntryView<'a> {
    pub thumbnail_url: &'a str,
    pub full_url: &'a str,
    pub filename: &'a str,
    pub classification: Option<&'a str>,
    pub station: &'a str,
    pub captured_at: &'a str,
}

impl EntryView<'_> {
    pub fn is_classified(&self) -> bool {
        self.classification.is_some()
    }

    pub fn class_label(&self) -> &str {
        self.classification.unwrap_or_default()
    }
}

pub struct LinkView {
    pub direction: &'static str,
    pub kind: String,
    pub page: u32,
    pub href: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "capture_gallery.html")]
pub struct CaptureGalleryTemplate<'a> {
    pub entries: Vec<EntryView<'a>>,
    pub before: Vec<LinkView>,
    pub after: Vec<LinkView>,
    pub current_page: u32,
    pub unavailable: bool,
    pub labels: &'a Labels,
}
