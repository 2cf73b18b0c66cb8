pub mod bramon;
pub mod gallery;
pub mod query;
pub mod radiants;
pub mod web;
