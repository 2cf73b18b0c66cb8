pub mod captures;
pub mod radiants;
pub mod stations;
