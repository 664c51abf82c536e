pub mod geo_object;
pub mod update;

pub use geo_object::*;
pub use update::*;
