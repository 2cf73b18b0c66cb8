mod catalog;
mod error;

pub use catalog::{Radiant, RadiantCatalog};
pub use error::RadiantError;
