use sqlx::{PgConnection, Postgres, QueryBuilder};

use crate::models::{DepthFilter, GeoObject, GeoObjectGeometry, GeoObjectItem, GeoObjectProperty, PropertyUpdate};

/// Standard property fields for SELECT queries
pub const PROPERTY_FIELDS: &str = r#"
    id, geo_object_id, name, description, material, depth, status_id,
    created_at, updated_at
"#;

pub const GEOMETRY_FIELDS: &str = "id, geo_object_id, geometry";

/// Loads an object with its property and geometry rows.
///
/// Returns `None` without touching the dependent tables when the object
/// itself does not exist.
pub(crate) async fn fetch_item(conn: &mut PgConnection, object_id: i32) -> Result<Option<GeoObjectItem>, sqlx::Error> {
    let object = sqlx::query_as::<_, GeoObject>("SELECT id, created_at FROM geo_objects WHERE id = $1")
        .bind(object_id)
        .fetch_optional(&mut *conn)
        .await?;

    let Some(object) = object else {
        return Ok(None);
    };

    let property_query = format!(
        "SELECT {} FROM geo_object_properties WHERE geo_object_id = $1",
        PROPERTY_FIELDS
    );
    let property = sqlx::query_as::<_, GeoObjectProperty>(&property_query)
        .bind(object.id)
        .fetch_optional(&mut *conn)
        .await?;

    let geometry_query = format!(
        "SELECT {} FROM geo_object_geometries WHERE geo_object_id = $1",
        GEOMETRY_FIELDS
    );
    let geometry = sqlx::query_as::<_, GeoObjectGeometry>(&geometry_query)
        .bind(object.id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(Some(GeoObjectItem { object, property, geometry }))
}

/// Builds the id listing behind `get_all_objects`
pub fn build_object_ids_query(global_layers: &[String], depth: DepthFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT o.id FROM geo_objects o");

    if depth != DepthFilter::Any {
        query.push(" JOIN geo_object_properties p ON p.geo_object_id = o.id");
    }
    query.push(" WHERE 1=1");

    if !global_layers.is_empty() {
        query.push(
            " AND EXISTS (SELECT 1 FROM global_layer_geo_objects lg \
             JOIN global_layers l ON l.id = lg.global_layer_id \
             WHERE lg.geo_object_id = o.id AND l.name = ANY(",
        );
        query.push_bind(global_layers.to_vec());
        query.push("))");
    }

    match depth {
        DepthFilter::Any => {}
        DepthFilter::Underground => {
            query.push(" AND p.depth < 0");
        }
        DepthFilter::Aboveground => {
            query.push(" AND p.depth > 0");
        }
    }

    query.push(" ORDER BY o.id");
    query
}

/// Builds an UPDATE touching only the populated columns of `update`.
///
/// Callers must not pass an empty update: the statement would only bump
/// `updated_at`.
pub fn build_property_update_query(object_id: i32, update: &PropertyUpdate) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("UPDATE geo_object_properties SET ");

    {
        let mut columns = query.separated(", ");
        if let Some(name) = &update.name {
            columns.push("name = ");
            columns.push_bind_unseparated(name.clone());
        }
        if let Some(description) = &update.description {
            columns.push("description = ");
            columns.push_bind_unseparated(description.clone());
        }
        if let Some(material) = &update.material {
            columns.push("material = ");
            columns.push_bind_unseparated(material.clone());
        }
        if let Some(depth) = update.depth {
            columns.push("depth = ");
            columns.push_bind_unseparated(depth);
        }
        columns.push("updated_at = NOW()");
    }

    query.push(" WHERE geo_object_id = ");
    query.push_bind(object_id);
    query
}

pub(crate) async fn set_status(conn: &mut PgConnection, object_id: i32, status_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE geo_object_properties
        SET status_id = $1, updated_at = NOW()
        WHERE geo_object_id = $2
        "#,
    )
    .bind(status_id)
    .bind(object_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// Links the object to every layer id. Existing links are not checked, so
/// repeating an id produces a duplicate row.
pub(crate) async fn insert_layer_links(conn: &mut PgConnection, object_id: i32, layer_ids: &[i32]) -> Result<u64, sqlx::Error> {
    if layer_ids.is_empty() {
        return Ok(0);
    }

    let mut query = QueryBuilder::<Postgres>::new("INSERT INTO global_layer_geo_objects (global_layer_id, geo_object_id) ");
    query.push_values(layer_ids, |mut row, layer_id| {
        row.push_bind(*layer_id).push_bind(object_id);
    });

    let result = query.build().execute(&mut *conn).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn apply_property_update(conn: &mut PgConnection, object_id: i32, update: &PropertyUpdate) -> Result<u64, sqlx::Error> {
    if update.is_empty() {
        return Ok(0);
    }

    let result = build_property_update_query(object_id, update)
        .build()
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
