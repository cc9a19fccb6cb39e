use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::state::data_model::{CarsResponse, CatalogEntry, SeriesTable};

pub const SERIES_LIST_PATH: &str = "/get_series_list";
pub const SERIES_TABLE_PATH: &str = "/get_series_table";
pub const ALL_CARS_PATH: &str = "/get_all_cars";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Request {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} answered with status {status}")]
    Status {
        path: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("could not decode {path} response: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Thin client for the three data endpoints. Every call is a bodyless POST
/// returning JSON.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_series_list(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.post_json(SERIES_LIST_PATH).await
    }

    pub async fn fetch_series_table(&self) -> Result<SeriesTable, ApiError> {
        self.post_json(SERIES_TABLE_PATH).await
    }

    pub async fn fetch_all_cars(&self) -> Result<CarsResponse, ApiError> {
        self.post_json(ALL_CARS_PATH).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!("POST {url}");
        let request_err = |source: reqwest::Error| ApiError::Request { path, source };

        let response = self.http.post(&url).send().await.map_err(request_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { path, status });
        }

        let body = response.bytes().await.map_err(request_err)?;
        let parsed = serde_json::from_slice(&body).map_err(|source| ApiError::Decode { path, source })?;
        info!("{path}: received {} bytes", body.len());
        Ok(parsed)
    }
}
