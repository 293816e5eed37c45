//! Typed records for the externally-owned backend tables.
//!
//! The backend owns and mutates these rows; this service only reads them.
//! Rows are parsed-or-rejected at the boundary so a malformed response
//! fails the whole load instead of leaking missing fields into the UI.

use serde::{Deserialize, Serialize};

/// A user account row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// A camera configuration row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: i64,
    /// 1 = live URL stream, anything else = MP4 file
    #[serde(rename = "type")]
    pub kind: i64,
    pub source: String,
    /// Free-text status label, e.g. "active"
    pub status: String,
    pub created_at: String,
}

impl Camera {
    pub fn kind_label(&self) -> &'static str {
        if self.kind == 1 {
            "URL Stream"
        } else {
            "MP4 File"
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// A detection-zone marker row, optionally enriched with its camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoMarker {
    pub id: i64,
    pub camera_id: i64,
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub created_at: String,
    #[serde(default)]
    pub camera: Option<Camera>,
}

/// A vehicle detection event row, optionally enriched with camera and marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub camera_id: i64,
    pub marker_id: i64,
    /// Recognized plate number
    pub number: String,
    #[serde(default)]
    pub numberplate_image: Option<String>,
    #[serde(default)]
    pub vehicle_image: Option<String>,
    #[serde(default)]
    pub person_image: Option<String>,
    pub time_stamp: String,
    /// 1 = active, anything else = inactive
    pub status: i64,
    pub created_at: String,
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default)]
    pub marker: Option<GeoMarker>,
}

impl Vehicle {
    pub fn is_active(&self) -> bool {
        self.status == 1
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active() {
            "Active"
        } else {
            "Inactive"
        }
    }
}
