use tracing::{debug, warn};

use super::helpers::{build_object_ids_query, fetch_item};
use super::GeoObjectAccessor;
use crate::errors::geo_object::GeoObjectError;
use crate::models::{DepthFilter, GeoObjectItem};

impl GeoObjectAccessor<'_> {
    /// Retrieves an object with its property and geometry, or `None` if the
    /// object does not exist
    pub async fn get_item(&mut self, object_id: i32) -> Result<Option<GeoObjectItem>, GeoObjectError> {
        let item = fetch_item(&mut *self.conn, object_id).await?;

        if item.is_none() {
            debug!("Geo object {} not found", object_id);
        }

        Ok(item)
    }

    /// Lists objects belonging to any of `global_layers` (all objects when
    /// empty), narrowed by depth.
    ///
    /// `is_negative` accepts either a [`DepthFilter`] or the tri-state
    /// `Option<bool>` API flag.
    pub async fn get_all_objects(
        &mut self,
        global_layers: &[String],
        is_negative: impl Into<DepthFilter>,
    ) -> Result<Vec<GeoObjectItem>, GeoObjectError> {
        let depth = is_negative.into();

        let ids: Vec<i32> = build_object_ids_query(global_layers, depth)
            .build_query_scalar()
            .fetch_all(&mut *self.conn)
            .await?;

        debug!(
            "Listing {} geo objects (layers: {:?}, depth: {:?})",
            ids.len(),
            global_layers,
            depth
        );

        let mut items = Vec::with_capacity(ids.len());
        for id in ids {
            match fetch_item(&mut *self.conn, id).await? {
                Some(item) => items.push(item),
                None => {
                    warn!("Geo object {} disappeared while assembling listing", id);
                    return Err(GeoObjectError::not_found(id));
                }
            }
        }

        Ok(items)
    }

    /// Ids of the objects a user has saved, in the order they were saved
    pub async fn get_user_saved_objects(&mut self, user_id: i32) -> Result<Vec<i32>, GeoObjectError> {
        let ids = sqlx::query_scalar::<_, i32>(
            "SELECT geo_object_id FROM user_geo_objects WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(ids)
    }
}
