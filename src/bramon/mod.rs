mod client;
mod error;
mod filter;
mod types;

pub use client::{BramonClient, BramonConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use filter::CaptureFilter;
pub use types::{parse_captured_at, Capture, CaptureFile, CaptureId, PageResult, Station};

#[cfg(test)]
pub(crate) use types::PageEnvelope;
