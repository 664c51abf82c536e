use tracing::debug;

use super::GeoObjectAccessor;
use crate::errors::geo_object::GeoObjectError;
use crate::models::{GeoObjectStatistics, MaterialCount, StatusType};

// Depth 0 counts as aboveground here, unlike the strict `> 0` used by
// object listings.
impl GeoObjectAccessor<'_> {
    pub async fn get_underground_count(&mut self) -> Result<i64, GeoObjectError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM geo_object_properties WHERE depth < 0")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    pub async fn get_aboveground_count(&mut self) -> Result<i64, GeoObjectError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM geo_object_properties WHERE depth >= 0")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    /// Average depth of aboveground objects, `None` if there are none
    pub async fn get_avg_depth_aboveground(&mut self) -> Result<Option<f64>, GeoObjectError> {
        let avg = sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(depth) FROM geo_object_properties WHERE depth >= 0")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(avg)
    }

    /// Average depth of underground objects, `None` if there are none
    pub async fn get_avg_depth_underground(&mut self) -> Result<Option<f64>, GeoObjectError> {
        let avg = sqlx::query_scalar::<_, Option<f64>>("SELECT AVG(depth) FROM geo_object_properties WHERE depth < 0")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(avg)
    }

    /// Number of objects per material, most common first
    pub async fn get_materials_count(&mut self) -> Result<Vec<MaterialCount>, GeoObjectError> {
        let counts = sqlx::query_as::<_, MaterialCount>(
            r#"
            SELECT material, COUNT(*) AS count
            FROM geo_object_properties
            GROUP BY material
            ORDER BY count DESC, material ASC NULLS LAST
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(counts)
    }

    pub async fn get_status_count(&mut self, status: StatusType) -> Result<i64, GeoObjectError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(p.status_id)
            FROM geo_object_properties p
            JOIN geo_object_statuses s ON s.id = p.status_id
            WHERE s.name = $1
            "#,
        )
        .bind(status.to_string())
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(count)
    }

    pub async fn get_active_status_count(&mut self) -> Result<i64, GeoObjectError> {
        self.get_status_count(StatusType::Active).await
    }

    pub async fn get_inactive_status_count(&mut self) -> Result<i64, GeoObjectError> {
        self.get_status_count(StatusType::Inactive).await
    }

    /// Collects every aggregate for the statistics dashboard
    pub async fn get_statistics(&mut self) -> Result<GeoObjectStatistics, GeoObjectError> {
        let stats = GeoObjectStatistics {
            underground_count: self.get_underground_count().await?,
            aboveground_count: self.get_aboveground_count().await?,
            avg_depth_aboveground: self.get_avg_depth_aboveground().await?,
            avg_depth_underground: self.get_avg_depth_underground().await?,
            materials: self.get_materials_count().await?,
            active_count: self.get_active_status_count().await?,
            inactive_count: self.get_inactive_status_count().await?,
        };

        debug!(
            "Geo object statistics: {} underground, {} aboveground, {} materials",
            stats.underground_count,
            stats.aboveground_count,
            stats.materials.len()
        );

        Ok(stats)
    }
}
