use serde::{Deserialize, Serialize};

/// Partial update of a geo object as submitted by the edit form.
///
/// Empty values count as "not provided": an empty string, an empty layer
/// list or a zero status id leave the stored value untouched. There is no
/// way to clear a column through this form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGeoObject {
    pub status: Option<i32>,
    pub name: Option<String>,
    pub global_layers: Option<Vec<i32>>,
    pub description: Option<String>,
    pub material: Option<String>,
}

impl UpdateGeoObject {
    pub fn status_id(&self) -> Option<i32> {
        self.status.filter(|id| *id != 0)
    }

    pub fn layer_ids(&self) -> &[i32] {
        self.global_layers.as_deref().unwrap_or_default()
    }

    /// Property columns carried by the form, with empty strings dropped.
    pub fn property_update(&self) -> PropertyUpdate {
        PropertyUpdate {
            name: non_empty(&self.name),
            description: non_empty(&self.description),
            material: non_empty(&self.material),
            depth: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status_id().is_none() && self.layer_ids().is_empty() && self.property_update().is_empty()
    }
}

/// Columns of `geo_object_properties` that may be rewritten in place.
///
/// `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub depth: Option<f64>,
}

impl PropertyUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.material.is_none() && self.depth.is_none()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
