//! Web dashboard: server-rendered tabbed tables plus a JSON snapshot API

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::loader::{DashboardData, LoadState, StateHandle, CONNECTIVITY_ERROR};
use crate::records::{Camera, GeoMarker, User, Vehicle};

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub state: StateHandle,
}

/// Build the dashboard axum router
pub fn build_router(state: StateHandle) -> Router {
    let dashboard_state = DashboardState { state };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/dashboard", get(api_dashboard_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(dashboard_state)
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.borrow().clone();

    let html = match state {
        LoadState::Loading => loading_page(),
        LoadState::Failed(message) => error_page(&message),
        LoadState::Loaded(data) => dashboard_page(&data),
    };

    Html(html)
}

async fn api_dashboard_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let mut state = dashboard.state.clone();

    // Suspends until the one-shot load settles. A slow backend keeps the
    // caller (and the page waiting on this response) in Loading.
    let response = match state.wait_for(LoadState::is_settled).await {
        Ok(settled) => match &*settled {
            LoadState::Loaded(data) => axum::Json(serde_json::json!({
                "state": "loaded",
                "users": data.users,
                "cameras": data.cameras,
                "markers": data.markers,
                "vehicles": data.vehicles,
            })),
            LoadState::Failed(message) => axum::Json(serde_json::json!({
                "state": "failed",
                "error": message,
            })),
            LoadState::Loading => axum::Json(serde_json::json!({"state": "loading"})),
        },
        // The loader task died without publishing a result
        Err(_) => axum::Json(serde_json::json!({
            "state": "failed",
            "error": CONNECTIVITY_ERROR,
        })),
    };
    response
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

const PAGE_STYLE: &str = "font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem;";
const TH_STYLE: &str = "padding: 0.5rem; text-align: left;";
const TD_STYLE: &str = "padding: 0.5rem;";
const ROW_STYLE: &str = "border-bottom: 1px solid #dee2e6;";
const HEAD_ROW_STYLE: &str = "border-bottom: 2px solid #dee2e6;";

fn loading_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Vehicle Monitoring System</title>
    <script>
        fetch('/api/dashboard').then(() => location.reload());
    </script>
</head>
<body style="{PAGE_STYLE}">
    <div style="display: flex; height: 80vh; align-items: center; justify-content: center;">
        <span style="font-size: 1.2rem;">Loading data...</span>
    </div>
</body>
</html>"#
    )
}

fn error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Vehicle Monitoring System</title>
</head>
<body style="{PAGE_STYLE}">
    <div style="display: flex; height: 80vh; align-items: center; justify-content: center;">
        <div style="width: 600px; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
            <h2 style="color: #dc2626; margin-top: 0;">Error</h2>
            <p>{message}</p>
        </div>
    </div>
</body>
</html>"#
    )
}

/// A colored status badge; green for active, gray otherwise
fn badge(label: &str, active: bool) -> String {
    let (color, bg) = if active {
        ("#155724", "#d4edda")
    } else {
        ("#383d41", "#e2e3e5")
    };
    format!(
        r#"<span style="display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.85em; font-weight: 600; color: {color}; background-color: {bg};">{label}</span>"#
    )
}

fn image_box(message: &str, color: &str, width: u32, height: u32) -> String {
    format!(
        r#"<div style="display: flex; align-items: center; justify-content: center; width: {width}px; height: {height}px; background-color: #f3f4f6; border: 1px solid #e5e7eb; border-radius: 0.375rem; font-size: 0.85em; color: {color};">{message}</div>"#
    )
}

/// Render one image payload as a placeholder, an error box, or an `<img>`.
///
/// Classification and normalization happen here; payloads that pass the
/// loose pre-filter but are not decodable base64 are caught by the
/// attempted-decode step. Images that still fail to decode in the browser
/// are swapped for the error box by the page's one-shot `imageError` hook.
fn image_cell(payload: Option<&str>, alt: &str, width: u32, height: u32) -> String {
    let mut preview = pw_images::Preview::new(payload);
    if let pw_images::Rendering::Picture(src) = preview.rendering() {
        if pw_images::try_decode(&src).is_err() {
            preview.note_decode_failure();
        }
    }

    match preview.rendering() {
        pw_images::Rendering::Placeholder => image_box("No image", "#6b7280", width, height),
        pw_images::Rendering::Error => image_box("Invalid image", "#dc2626", width, height),
        pw_images::Rendering::Picture(src) => format!(
            r#"<img src="{src}" alt="{alt}" width="{width}" height="{height}" style="border-radius: 0.375rem; object-fit: cover;" onerror="imageError(this)">"#
        ),
    }
}

/// "Camera #N" with the camera's status badge when the join was returned
fn camera_cell(camera_id: i64, camera: Option<&Camera>) -> String {
    match camera {
        Some(camera) => format!(
            "Camera #{} {}",
            camera_id,
            badge(&camera.status, camera.is_active())
        ),
        None => format!("Camera #{}", camera_id),
    }
}

fn image_dialog(dialog_id: &str, title: &str, payload: Option<&str>) -> String {
    format!(
        r#"<button style="padding: 0.25em 0.6em; border: 1px solid #dee2e6; border-radius: 0.25rem; background: #fff; cursor: pointer; font-size: 0.85em;" onclick="document.getElementById('{dialog_id}').showModal()">{title}</button>
<dialog id="{dialog_id}" style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1.5rem;">
    <h3 style="margin-top: 0;">{title}</h3>
    <div style="display: flex; justify-content: center; padding: 1rem;">{image}</div>
    <form method="dialog" style="text-align: right;"><button style="padding: 0.25em 0.8em;">Close</button></form>
</dialog>"#,
        image = image_cell(payload, title, 400, 300),
    )
}

fn vehicle_rows(vehicles: &[Vehicle]) -> String {
    vehicles
        .iter()
        .map(|v| {
            let images = format!(
                "{} {} {}",
                image_dialog(&format!("dlg-vehicle-{}", v.id), "Vehicle", v.vehicle_image.as_deref()),
                image_dialog(&format!("dlg-plate-{}", v.id), "Numberplate", v.numberplate_image.as_deref()),
                image_dialog(&format!("dlg-person-{}", v.id), "Person", v.person_image.as_deref()),
            );
            format!(
                r#"<tr style="{ROW_STYLE}">
                    <td style="{TD_STYLE}">{id}</td>
                    <td style="{TD_STYLE}">{number}</td>
                    <td style="{TD_STYLE}">{camera}</td>
                    <td style="{TD_STYLE}">{timestamp}</td>
                    <td style="{TD_STYLE}">{status}</td>
                    <td style="{TD_STYLE}">{images}</td>
                    <td style="{TD_STYLE}">{preview}</td>
                </tr>"#,
                id = v.id,
                number = v.number,
                camera = camera_cell(v.camera_id, v.camera.as_ref()),
                timestamp = v.time_stamp,
                status = badge(v.status_label(), v.is_active()),
                images = images,
                preview = image_cell(
                    v.vehicle_image.as_deref(),
                    &format!("Vehicle {}", v.id),
                    60,
                    45
                ),
            )
        })
        .collect()
}

fn camera_rows(cameras: &[Camera]) -> String {
    cameras
        .iter()
        .map(|c| {
            format!(
                r#"<tr style="{ROW_STYLE}">
                    <td style="{TD_STYLE}">{id}</td>
                    <td style="{TD_STYLE}">{kind}</td>
                    <td style="{TD_STYLE}">{source}</td>
                    <td style="{TD_STYLE}">{status}</td>
                    <td style="{TD_STYLE}">{created_at}</td>
                </tr>"#,
                id = c.id,
                kind = c.kind_label(),
                source = c.source,
                status = badge(&c.status, c.is_active()),
                created_at = c.created_at,
            )
        })
        .collect()
}

fn marker_rows(markers: &[GeoMarker]) -> String {
    markers
        .iter()
        .map(|m| {
            format!(
                r#"<tr style="{ROW_STYLE}">
                    <td style="{TD_STYLE}">{id}</td>
                    <td style="{TD_STYLE}">{camera}</td>
                    <td style="{TD_STYLE}">X: {x1}-{x2}, Y: {y1}-{y2}</td>
                    <td style="{TD_STYLE}">{created_at}</td>
                </tr>"#,
                id = m.id,
                camera = camera_cell(m.camera_id, m.camera.as_ref()),
                x1 = m.x1,
                x2 = m.x2,
                y1 = m.y1,
                y2 = m.y2,
                created_at = m.created_at,
            )
        })
        .collect()
}

fn user_rows(users: &[User]) -> String {
    users
        .iter()
        .map(|u| {
            format!(
                r#"<tr style="{ROW_STYLE}">
                    <td style="{TD_STYLE}">{id}</td>
                    <td style="{TD_STYLE}">{name}</td>
                    <td style="{TD_STYLE}">{email}</td>
                    <td style="{TD_STYLE}">{created_at}</td>
                </tr>"#,
                id = u.id,
                name = u.name,
                email = u.email,
                created_at = u.created_at,
            )
        })
        .collect()
}

fn dashboard_page(data: &DashboardData) -> String {
    let tab_button_style = "padding: 0.5rem 1rem; border: none; border-radius: 0.375rem; background: #f3f4f6; cursor: pointer; margin-right: 0.5rem;";

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Vehicle Monitoring System</title>
    <script>
        function showTab(name) {{
            document.querySelectorAll('.tab-panel').forEach(el => el.style.display = 'none');
            document.querySelectorAll('.tab-button').forEach(el => el.style.fontWeight = '400');
            document.getElementById('tab-' + name).style.display = 'block';
            document.getElementById('btn-' + name).style.fontWeight = '600';
        }}
        function imageError(img) {{
            const w = img.getAttribute('width');
            const h = img.getAttribute('height');
            const box = document.createElement('div');
            box.setAttribute('style', 'display: flex; align-items: center; justify-content: center; width: ' + w + 'px; height: ' + h + 'px; background-color: #f3f4f6; border: 1px solid #e5e7eb; border-radius: 0.375rem; font-size: 0.85em; color: #dc2626;');
            box.textContent = 'Invalid image';
            img.replaceWith(box);
        }}
    </script>
</head>
<body style="{PAGE_STYLE}">
    <h1>Vehicle Monitoring System</h1>
    <nav style="margin-bottom: 1rem;">
        <button id="btn-vehicles" class="tab-button" style="{tab_button_style} font-weight: 600;" onclick="showTab('vehicles')">Vehicles</button>
        <button id="btn-cameras" class="tab-button" style="{tab_button_style}" onclick="showTab('cameras')">Cameras</button>
        <button id="btn-markers" class="tab-button" style="{tab_button_style}" onclick="showTab('markers')">Geo Markers</button>
        <button id="btn-users" class="tab-button" style="{tab_button_style}" onclick="showTab('users')">Users</button>
    </nav>
    <section id="tab-vehicles" class="tab-panel">
        <h2>Vehicles Data</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <caption style="caption-side: bottom; padding: 0.5rem; color: #6b7280;">List of detected vehicles</caption>
            <thead>
                <tr style="{HEAD_ROW_STYLE}">
                    <th style="{TH_STYLE}">ID</th>
                    <th style="{TH_STYLE}">Vehicle Number</th>
                    <th style="{TH_STYLE}">Camera</th>
                    <th style="{TH_STYLE}">Timestamp</th>
                    <th style="{TH_STYLE}">Status</th>
                    <th style="{TH_STYLE}">Images</th>
                    <th style="{TH_STYLE}">Preview</th>
                </tr>
            </thead>
            <tbody>{vehicle_rows}</tbody>
        </table>
    </section>
    <section id="tab-cameras" class="tab-panel" style="display: none;">
        <h2>Cameras Data</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <caption style="caption-side: bottom; padding: 0.5rem; color: #6b7280;">List of surveillance cameras</caption>
            <thead>
                <tr style="{HEAD_ROW_STYLE}">
                    <th style="{TH_STYLE}">ID</th>
                    <th style="{TH_STYLE}">Type</th>
                    <th style="{TH_STYLE}">Source</th>
                    <th style="{TH_STYLE}">Status</th>
                    <th style="{TH_STYLE}">Created At</th>
                </tr>
            </thead>
            <tbody>{camera_rows}</tbody>
        </table>
    </section>
    <section id="tab-markers" class="tab-panel" style="display: none;">
        <h2>Geo Markers Data</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <caption style="caption-side: bottom; padding: 0.5rem; color: #6b7280;">List of geo markers for detection zones</caption>
            <thead>
                <tr style="{HEAD_ROW_STYLE}">
                    <th style="{TH_STYLE}">ID</th>
                    <th style="{TH_STYLE}">Camera</th>
                    <th style="{TH_STYLE}">Coordinates</th>
                    <th style="{TH_STYLE}">Created At</th>
                </tr>
            </thead>
            <tbody>{marker_rows}</tbody>
        </table>
    </section>
    <section id="tab-users" class="tab-panel" style="display: none;">
        <h2>Users Data</h2>
        <table style="width: 100%; border-collapse: collapse;">
            <caption style="caption-side: bottom; padding: 0.5rem; color: #6b7280;">List of system users</caption>
            <thead>
                <tr style="{HEAD_ROW_STYLE}">
                    <th style="{TH_STYLE}">ID</th>
                    <th style="{TH_STYLE}">Name</th>
                    <th style="{TH_STYLE}">Email</th>
                    <th style="{TH_STYLE}">Created At</th>
                </tr>
            </thead>
            <tbody>{user_rows}</tbody>
        </table>
    </section>
</body>
</html>"#,
        vehicle_rows = vehicle_rows(&data.vehicles),
        camera_rows = camera_rows(&data.cameras),
        marker_rows = marker_rows(&data.markers),
        user_rows = user_rows(&data.users),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::loader::new_state_channel;

    fn sample_data() -> DashboardData {
        let camera = Camera {
            id: 1,
            kind: 1,
            source: "rtsp://cam1".to_string(),
            status: "active".to_string(),
            created_at: "2025-05-01T00:00:00Z".to_string(),
        };
        DashboardData {
            users: vec![User {
                id: 1,
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                created_at: "2025-05-10T10:00:00Z".to_string(),
            }],
            cameras: vec![camera.clone()],
            markers: vec![GeoMarker {
                id: 1,
                camera_id: 1,
                x1: 0.0,
                x2: 100.0,
                y1: 0.0,
                y2: 80.0,
                created_at: "2025-05-02T00:00:00Z".to_string(),
                camera: Some(camera.clone()),
            }],
            vehicles: vec![Vehicle {
                id: 7,
                camera_id: 1,
                marker_id: 1,
                number: "KA01AB1234".to_string(),
                numberplate_image: None,
                vehicle_image: Some("/9j/4AAQSkZJRgABAQAAAQABAAD/2g==".to_string()),
                person_image: Some("not base64!".to_string()),
                time_stamp: "2025-05-10T10:00:00Z".to_string(),
                status: 1,
                created_at: "2025-05-10T10:00:01Z".to_string(),
                camera: Some(camera),
                marker: None,
            }],
        }
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (_tx, rx) = new_state_channel();
        let (status, body) = get_body(build_router(rx), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn index_while_loading_shows_loading_page() {
        let (_tx, rx) = new_state_channel();
        let (status, html) = get_body(build_router(rx), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Loading data..."));
        assert!(!html.contains("Vehicles Data"));
    }

    #[tokio::test]
    async fn index_on_failure_shows_only_the_generic_error() {
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Failed(CONNECTIVITY_ERROR.to_string()))
            .unwrap();

        let (status, html) = get_body(build_router(rx), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(CONNECTIVITY_ERROR));
        // No data from any query is displayed on failure
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn index_on_loaded_renders_all_four_tabs() {
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Loaded(sample_data())).unwrap();

        let (status, html) = get_body(build_router(rx), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Vehicles Data"));
        assert!(html.contains("Cameras Data"));
        assert!(html.contains("Geo Markers Data"));
        assert!(html.contains("Users Data"));
        assert!(html.contains("KA01AB1234"));
        assert!(html.contains("URL Stream"));
        assert!(html.contains(">Active</span>"));
        assert!(html.contains("X: 0-100, Y: 0-80"));
        assert!(html.contains("asha@example.com"));
    }

    #[tokio::test]
    async fn image_cells_cover_all_three_renderings() {
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Loaded(sample_data())).unwrap();

        let (_, html) = get_body(build_router(rx), "/").await;
        // Bare payload normalized and rendered
        assert!(html.contains(r#"src="data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD/2g==""#));
        // Absent payload renders the placeholder
        assert!(html.contains("No image"));
        // Malformed payload renders the error indicator
        assert!(html.contains("Invalid image"));
    }

    #[tokio::test]
    async fn undecodable_payload_renders_error_despite_passing_prefilter() {
        let mut data = sample_data();
        // Base64 alphabet, but not decodable (bad length)
        data.vehicles[0].vehicle_image = Some("AAAAA".to_string());
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Loaded(data)).unwrap();

        let (_, html) = get_body(build_router(rx), "/").await;
        assert!(!html.contains(r#"src="data:image/jpeg;base64,AAAAA""#));
        assert!(html.contains("Invalid image"));
    }

    #[tokio::test]
    async fn api_dashboard_returns_loaded_snapshot() {
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Loaded(sample_data())).unwrap();

        let (status, body) = get_body(build_router(rx), "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["state"], "loaded");
        assert_eq!(json["users"].as_array().unwrap().len(), 1);
        assert_eq!(json["vehicles"][0]["number"], "KA01AB1234");
        assert_eq!(json["vehicles"][0]["camera"]["status"], "active");
    }

    #[tokio::test]
    async fn api_dashboard_returns_failure() {
        let (tx, rx) = new_state_channel();
        tx.send(LoadState::Failed(CONNECTIVITY_ERROR.to_string()))
            .unwrap();

        let (status, body) = get_body(build_router(rx), "/api/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["error"], CONNECTIVITY_ERROR);
    }

    #[tokio::test]
    async fn api_dashboard_waits_for_settle() {
        let (tx, rx) = new_state_channel();
        let router = build_router(rx);

        let request = tokio::spawn(async move { get_body(router, "/api/dashboard").await });

        // Settle after the request is in flight
        tokio::task::yield_now().await;
        tx.send(LoadState::Loaded(sample_data())).unwrap();

        let (status, body) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["state"], "loaded");
    }
}
