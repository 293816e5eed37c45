//! Client-side API fetch helpers
//!
//! These types mirror the server-side JSON snapshot returned by
//! `/api/dashboard` and are shared between SSR and client-side hydration.

use serde::{Deserialize, Serialize};

/// User row as returned in the dashboard snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Camera row as returned in the dashboard snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub source: String,
    pub status: String,
    pub created_at: String,
}

impl CameraResponse {
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

/// Detection-zone marker row, optionally enriched with its camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerResponse {
    pub id: i64,
    pub camera_id: i64,
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
    pub created_at: String,
    #[serde(default)]
    pub camera: Option<CameraResponse>,
}

/// Vehicle event row, optionally enriched with camera and marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub camera_id: i64,
    pub marker_id: i64,
    pub number: String,
    #[serde(default)]
    pub numberplate_image: Option<String>,
    #[serde(default)]
    pub vehicle_image: Option<String>,
    #[serde(default)]
    pub person_image: Option<String>,
    pub time_stamp: String,
    pub status: i64,
    pub created_at: String,
    #[serde(default)]
    pub camera: Option<CameraResponse>,
    #[serde(default)]
    pub marker: Option<MarkerResponse>,
}

impl VehicleResponse {
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

/// Tri-state dashboard snapshot as returned by /api/dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DashboardResponse {
    Loading,
    Failed {
        error: String,
    },
    Loaded {
        users: Vec<UserResponse>,
        cameras: Vec<CameraResponse>,
        markers: Vec<MarkerResponse>,
        vehicles: Vec<VehicleResponse>,
    },
}

pub async fn fetch_dashboard() -> Result<DashboardResponse, String> {
    // In SSR mode, this returns Loading (the server populates the page)
    // In hydrate/CSR mode, this fetches the snapshot from the JSON API
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}/api/dashboard", origin);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(feature = "hydrate"))]
    {
        Ok(DashboardResponse::Loading)
    }
}
