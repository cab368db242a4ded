//! Client for the visits service.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};

use super::error::{UpstreamError, UpstreamResult};
use crate::models::FetchedSnapshot;

/// Source of per-date visit snapshots.
#[async_trait]
pub trait VisitsApi: Send + Sync {
    /// Fetch the hourly visit snapshot for one date.
    async fn fetch_snapshot(&self, date: NaiveDate) -> UpstreamResult<FetchedSnapshot>;
}

/// HTTP implementation backed by the visits service's REST API.
#[derive(Debug, Clone)]
pub struct HttpVisitsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVisitsApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL for one date's snapshot: `{base}/api/visits/{YYYY}/{MM}/{DD}`.
    pub fn snapshot_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/api/visits/{:04}/{:02}/{:02}",
            self.base_url.trim_end_matches('/'),
            date.year(),
            date.month(),
            date.day()
        )
    }
}

#[async_trait]
impl VisitsApi for HttpVisitsApi {
    async fn fetch_snapshot(&self, date: NaiveDate) -> UpstreamResult<FetchedSnapshot> {
        let url = self.snapshot_url(date);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| UpstreamError::Decode { url, source })
    }
}
