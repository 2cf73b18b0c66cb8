use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// A BRAMON camera station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Station {
    pub id: u64,
    pub name: String,
}

/// Capture identifiers are numeric on current API versions, but older
/// deployments hand out strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptureId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CaptureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureId::Number(n) => write!(f, "{}", n),
            CaptureId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureFile {
    pub filename: String,
    pub url: String,
}

/// A single meteor capture as returned by `operator/captures`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Capture {
    pub id: CaptureId,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(deserialize_with = "deserialize_captured_at")]
    pub captured_at: NaiveDateTime,
    pub station: Station,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<CaptureFile>,
}

impl Capture {
    /// Radiant class, treating an empty string the same as a missing one.
    pub fn classification(&self) -> Option<&str> {
        self.class.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// One page of captures
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<Capture>,
    pub current_page: u32,
    pub last_page: u32,
}

impl PageResult {
    /// The page shown when nothing could be fetched.
    pub fn empty() -> Self {
        PageResult {
            items: Vec::new(),
            current_page: 1,
            last_page: 1,
        }
    }
}

/// Wire envelope shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Vec<T>,
}

/// Wire envelope of the paginated captures endpoint. Items are decoded one by
/// one so a single malformed capture does not sink the whole page.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope {
    pub data: Vec<serde_json::Value>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
}

fn first_page() -> u32 {
    1
}

impl From<PageEnvelope> for PageResult {
    fn from(envelope: PageEnvelope) -> Self {
        let items = envelope
            .data
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Capture>(item) {
                Ok(capture) => Some(capture),
                Err(e) => {
                    log::warn!("Skipping malformed capture: {}", e);
                    None
                }
            })
            .collect();

        PageResult {
            items,
            current_page: envelope.current_page.max(1),
            last_page: envelope.last_page.max(1),
        }
    }
}

/// Timestamps come back either as RFC 3339 or as `YYYY-MM-DD HH:MM:SS`.
/// The wall-clock time as written by the API is kept.
pub fn parse_captured_at(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_captured_at<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_captured_at(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid captured_at: {}", s)))
}
