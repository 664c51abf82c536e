pub mod config;
pub mod db;
pub mod errors;
pub mod models;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

pub use db::{Database, GeoObjectAccessor};
pub use errors::geo_object::GeoObjectError;
