//! Data loader: one-shot sequential fetch of the four dashboard tables.
//!
//! The load runs exactly once per service session. Each read awaits the
//! previous one; the first failure aborts the remaining reads and collapses
//! the whole view to Failed with a single generic connectivity message.
//! There is no retry, no timeout, and no partial success.

use serde::Serialize;
use tokio::sync::watch;

use crate::records::{Camera, GeoMarker, User, Vehicle};
use crate::supabase::SupabaseClient;

/// Generic message shown for any connectivity failure; the specific cause
/// is logged but never surfaced
pub const CONNECTIVITY_ERROR: &str = "Failed to fetch data. Please check your connection.";

/// Everything the dashboard displays, aggregated from the four reads
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardData {
    pub users: Vec<User>,
    pub cameras: Vec<Camera>,
    pub markers: Vec<GeoMarker>,
    pub vehicles: Vec<Vehicle>,
}

/// Tri-state view over the load
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(DashboardData),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// Read-side handle to the load state, shared with the dashboard
pub type StateHandle = watch::Receiver<LoadState>;

/// Create a state channel starting in Loading
pub fn new_state_channel() -> (watch::Sender<LoadState>, StateHandle) {
    watch::channel(LoadState::Loading)
}

/// Issue the four reads in order, stopping at the first failure
pub async fn load_dashboard(client: &SupabaseClient) -> crate::Result<DashboardData> {
    let users = client.fetch_users().await?;
    let cameras = client.fetch_cameras().await?;
    let markers = client.fetch_markers().await?;
    let vehicles = client.fetch_vehicles().await?;

    Ok(DashboardData {
        users,
        cameras,
        markers,
        vehicles,
    })
}

/// Run the load once and publish the settled state
pub async fn run_loader(client: SupabaseClient, state: watch::Sender<LoadState>) {
    match load_dashboard(&client).await {
        Ok(data) => {
            tracing::info!(
                "Loaded {} users, {} cameras, {} markers, {} vehicles",
                data.users.len(),
                data.cameras.len(),
                data.markers.len(),
                data.vehicles.len()
            );
            let _ = state.send(LoadState::Loaded(data));
        }
        Err(e) => {
            tracing::error!("Dashboard load failed: {}", e);
            let _ = state.send(LoadState::Failed(CONNECTIVITY_ERROR.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::BackendConfig;
    use crate::io::{HttpResponse, MockHttpClient};

    fn test_client(mock: MockHttpClient) -> SupabaseClient {
        let config = BackendConfig {
            url: "https://example.supabase.co".to_string(),
            api_key: "anon-key".to_string(),
        };
        SupabaseClient::new(&config, Arc::new(mock))
    }

    fn ok(body: &str) -> crate::Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn users_body() -> String {
        let rows: Vec<String> = (1..=2)
            .map(|i| {
                format!(
                    r#"{{"id": {i}, "name": "user{i}", "email": "u{i}@example.com", "created_at": "2025-05-10T10:00:00Z"}}"#
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    fn cameras_body() -> String {
        let rows: Vec<String> = (1..=3)
            .map(|i| {
                format!(
                    r#"{{"id": {i}, "type": 1, "source": "rtsp://cam{i}", "status": "active", "created_at": "2025-05-10T10:00:00Z"}}"#
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    const MARKERS_BODY: &str = r#"[{"id": 1, "camera_id": 1, "x1": 0, "x2": 100, "y1": 0, "y2": 80, "created_at": "2025-05-10T10:00:00Z"}]"#;

    const VEHICLES_BODY: &str = r#"[{"id": 1, "camera_id": 1, "marker_id": 1, "number": "KA01AB1234",
        "time_stamp": "2025-05-10T10:00:00Z", "status": 1, "created_at": "2025-05-10T10:00:01Z"}]"#;

    #[tokio::test]
    async fn four_successes_load_with_expected_counts() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|url, _| {
            let url = url.to_string();
            Box::pin(async move {
                if url.contains("/users") {
                    ok(&users_body())
                } else if url.contains("/cameras") {
                    ok(&cameras_body())
                } else if url.contains("/geo_markers") {
                    ok(MARKERS_BODY)
                } else {
                    ok(VEHICLES_BODY)
                }
            })
        });

        let data = load_dashboard(&test_client(mock)).await.unwrap();
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.cameras.len(), 3);
        assert_eq!(data.markers.len(), 1);
        assert_eq!(data.vehicles.len(), 1);
    }

    #[tokio::test]
    async fn third_failure_aborts_the_fourth_read() {
        // Expectations are sequential: users and cameras succeed, the
        // marker query fails, and no vehicles request may be issued at all
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url, _| url.contains("/users"))
            .times(1)
            .returning(|_, _| Box::pin(async { ok(&users_body()) }));
        mock.expect_get()
            .withf(|url, _| url.contains("/cameras"))
            .times(1)
            .returning(|_, _| Box::pin(async { ok(&cameras_body()) }));
        mock.expect_get()
            .withf(|url, _| url.contains("/geo_markers"))
            .times(1)
            .returning(|_, _| {
                Box::pin(async {
                    Err(crate::PlatewatchError::Http("connection reset".to_string()))
                })
            });
        mock.expect_get()
            .withf(|url, _| url.contains("/vehicles"))
            .times(0);

        let result = load_dashboard(&test_client(mock)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_loader_publishes_loaded() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|url, _| {
            let url = url.to_string();
            Box::pin(async move {
                if url.contains("/users") {
                    ok(&users_body())
                } else if url.contains("/cameras") {
                    ok(&cameras_body())
                } else if url.contains("/geo_markers") {
                    ok(MARKERS_BODY)
                } else {
                    ok(VEHICLES_BODY)
                }
            })
        });

        let (tx, mut rx) = new_state_channel();
        assert!(matches!(&*rx.borrow(), LoadState::Loading));

        run_loader(test_client(mock), tx).await;

        let state = rx.wait_for(|s| s.is_settled()).await.unwrap();
        match &*state {
            LoadState::Loaded(data) => assert_eq!(data.users.len(), 2),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_loader_publishes_generic_failure_message() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async {
                Err(crate::PlatewatchError::Http(
                    "dns error: no such host".to_string(),
                ))
            })
        });

        let (tx, rx) = new_state_channel();
        run_loader(test_client(mock), tx).await;

        match &*rx.borrow() {
            LoadState::Failed(msg) => {
                assert_eq!(msg, CONNECTIVITY_ERROR);
                // The underlying cause is logged, not surfaced
                assert!(!msg.contains("dns error"));
            }
            other => panic!("expected Failed, got {other:?}"),
        };
    }
}
