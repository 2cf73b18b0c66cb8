pub mod handlers;
pub mod render;
pub mod templates;

pub use render::{
    render_capture_page, render_captures, render_station_filter, render_station_form,
};
