//! Data access for geo objects and the rows hanging off them: properties,
//! geometries, layer links and saved-object links.
//!
//! The accessor borrows a connection for its whole lifetime. Hand it a
//! pooled connection and every statement commits on its own; hand it an
//! open transaction and the statements join that transaction instead.
//!
//! ```ignore
//! let mut conn = db.pool.acquire().await?;
//! let mut accessor = GeoObjectAccessor::new(&mut conn);
//! let item = accessor.get_item(object_id).await?;
//! ```

use sqlx::PgConnection;

mod crud;
mod helpers;
mod stats;
mod updates;

pub use helpers::{build_object_ids_query, build_property_update_query, GEOMETRY_FIELDS, PROPERTY_FIELDS};

pub struct GeoObjectAccessor<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> GeoObjectAccessor<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}
