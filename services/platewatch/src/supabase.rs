//! Supabase PostgREST read client.
//!
//! Issues the four table reads the dashboard needs. The client is
//! explicitly constructed and holds an injected [`HttpClient`], so tests
//! run against a mock instead of a live project.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::io::HttpClient;
use crate::records::{Camera, GeoMarker, User, Vehicle};

/// Client for a hosted Supabase project's REST interface
pub struct SupabaseClient {
    rest_url: String,
    api_key: String,
    bearer: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("rest_url", &self.rest_url)
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig, http: Arc<dyn HttpClient>) -> Self {
        let rest_url = format!("{}/rest/v1", config.url.trim_end_matches('/'));
        tracing::debug!("Created SupabaseClient for {}", rest_url);

        Self {
            rest_url,
            api_key: config.api_key.clone(),
            bearer: format!("Bearer {}", config.api_key),
            http,
        }
    }

    /// Read all rows from a table with the given PostgREST select clause
    async fn select<T: DeserializeOwned>(&self, table: &str, select: &str) -> crate::Result<Vec<T>> {
        let url = format!("{}/{}?select={}", self.rest_url, table, select);
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", self.bearer.as_str()),
        ];

        let response = self.http.get(&url, &headers).await?;
        if response.status != 200 {
            return Err(crate::PlatewatchError::Backend(format!(
                "{} query returned status {}",
                table, response.status
            )));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            crate::PlatewatchError::Backend(format!("Malformed {} response: {}", table, e))
        })
    }

    /// All users, unfiltered
    pub async fn fetch_users(&self) -> crate::Result<Vec<User>> {
        self.select("users", "*").await
    }

    /// All cameras, unfiltered
    pub async fn fetch_cameras(&self) -> crate::Result<Vec<Camera>> {
        self.select("cameras", "*").await
    }

    /// All detection-zone markers, each joined with its owning camera
    pub async fn fetch_markers(&self) -> crate::Result<Vec<GeoMarker>> {
        self.select("geo_markers", "*,camera:cameras(*)").await
    }

    /// All vehicle events, each joined with camera and marker
    pub async fn fetch_vehicles(&self) -> crate::Result<Vec<Vehicle>> {
        self.select("vehicles", "*,camera:cameras(*),marker:geo_markers(*)")
            .await
    }
}
