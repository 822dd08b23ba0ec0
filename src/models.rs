//! Data models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque boat record identifier.
///
/// An empty identifier never reaches the remote service; fetch operations
/// gate on [`BoatId::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoatId(String);

impl BoatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the raw identifier value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Boat-type filter key. The empty string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoatTypeId(String);

impl BoatTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Unfiltered key matching every boat type.
    pub fn all() -> Self {
        Self(String::new())
    }

    pub fn is_all(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single boat review. Read-only; the shape is owned by the remote
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author: String,
    /// Rating between 1 and 5.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Boat record as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatRecord {
    pub id: BoatId,
    pub name: String,
    pub description: String,
    /// Hull length in feet.
    pub length: f64,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Draft edit for a single boat, staged before a batched save.
///
/// Only the edited fields are set; `None` leaves the stored value
/// untouched. Drafts are keyed by [`BoatId`]; staging a second draft for
/// the same boat overlays the newly edited fields onto the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatUpdate {
    pub id: BoatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BoatUpdate {
    /// New empty draft for the given boat.
    pub fn new(id: BoatId) -> Self {
        Self {
            id,
            name: None,
            length: None,
            price: None,
            description: None,
        }
    }

    /// Overlay another draft's edited fields onto this one.
    pub fn merge(&mut self, other: Self) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.length.is_some() {
            self.length = other.length;
        }
        if other.price.is_some() {
            self.price = other.price;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
    }
}

/// Device position in decimal WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Marker rendered on the map view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub location: GeoPosition,
}

/// Field metadata from the object-schema introspection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMeta {
    pub label: String,
}

/// One-shot object schema lookup result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub fields: HashMap<String, FieldMeta>,
}

impl ObjectSchema {
    /// Display label for a field, if the schema knows it.
    pub fn label_for(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|meta| meta.label.as_str())
    }
}
