use sqlx::Connection;
use tracing::{debug, info};

use super::helpers::{apply_property_update, insert_layer_links, set_status};
use super::GeoObjectAccessor;
use crate::errors::geo_object::GeoObjectError;
use crate::models::{GeoObjectItem, PropertyUpdate, UpdateGeoObject};

impl GeoObjectAccessor<'_> {
    /// Sets the status of the object's property row.
    ///
    /// Opens no transaction of its own: when the accessor wraps a
    /// transaction the change is only visible after the caller commits.
    pub async fn update_status(&mut self, object_id: i32, status_id: i32) -> Result<u64, GeoObjectError> {
        let rows = set_status(&mut *self.conn, object_id, status_id).await?;
        debug!("Set status {} on geo object {} ({} rows)", status_id, object_id, rows);
        Ok(rows)
    }

    /// Adds layer links for the object
    pub async fn update_layers(&mut self, object_id: i32, layer_ids: &[i32]) -> Result<(), GeoObjectError> {
        let rows = insert_layer_links(&mut *self.conn, object_id, layer_ids).await?;
        if rows > 0 {
            info!("Linked geo object {} to {} layers", object_id, rows);
        }
        Ok(())
    }

    /// Rewrites the populated columns of the object's property row.
    /// An empty update issues no statement.
    pub async fn update_property(&mut self, object_id: i32, update: &PropertyUpdate) -> Result<u64, GeoObjectError> {
        let rows = apply_property_update(&mut *self.conn, object_id, update).await?;
        if rows > 0 {
            info!("Updated properties of geo object {}", object_id);
        }
        Ok(rows)
    }

    /// Applies a form update and returns the object as stored afterwards.
    ///
    /// All writes happen in a single transaction. Any failure rolls the
    /// whole update back, including layer links added before the failure.
    pub async fn update_item(&mut self, object_id: i32, form: &UpdateGeoObject) -> Result<GeoObjectItem, GeoObjectError> {
        if form.is_empty() {
            debug!("Empty update for geo object {}, nothing to write", object_id);
            return self
                .get_item(object_id)
                .await?
                .ok_or_else(|| GeoObjectError::not_found(object_id));
        }

        let mut tx = self.conn.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM geo_objects WHERE id = $1)")
            .bind(object_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Err(GeoObjectError::not_found(object_id));
        }

        if let Some(status_id) = form.status_id() {
            set_status(&mut tx, object_id, status_id).await?;
        }

        insert_layer_links(&mut tx, object_id, form.layer_ids()).await?;
        apply_property_update(&mut tx, object_id, &form.property_update()).await?;

        tx.commit().await?;
        info!("Updated geo object {}", object_id);

        self.get_item(object_id)
            .await?
            .ok_or_else(|| GeoObjectError::not_found(object_id))
    }
}
