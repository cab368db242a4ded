//! Client for the public sunrise-sunset service.
//!
//! `GET {base}/json?lat=&lng=&date=&formatted=0` returns ISO-8601 timestamps
//! plus a `status` field that is `"OK"` on success; anything else (for example
//! `INVALID_DATE`) comes with a 200 response and must be checked explicitly.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::error::{UpstreamError, UpstreamResult};
use crate::models::SunTimes;

pub const DEFAULT_SUN_API_BASE: &str = "https://api.sunrise-sunset.org";

/// Source of sunrise/sunset times for a coordinate and date.
#[async_trait]
pub trait SunApi: Send + Sync {
    async fn fetch_sun_times(
        &self,
        lat: f64,
        lng: f64,
        date: NaiveDate,
    ) -> UpstreamResult<SunTimes>;
}

#[derive(Debug, Deserialize)]
struct SunResponse {
    results: SunResults,
    status: String,
}

#[derive(Debug, Deserialize)]
struct SunResults {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

/// HTTP implementation backed by api.sunrise-sunset.org.
#[derive(Debug, Clone)]
pub struct HttpSunApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSunApi {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn query_url(&self, lat: f64, lng: f64, date: NaiveDate) -> String {
        format!(
            "{}/json?lat={}&lng={}&date={}&formatted=0",
            self.base_url.trim_end_matches('/'),
            lat,
            lng,
            date
        )
    }
}

#[async_trait]
impl SunApi for HttpSunApi {
    async fn fetch_sun_times(
        &self,
        lat: f64,
        lng: f64,
        date: NaiveDate,
    ) -> UpstreamResult<SunTimes> {
        let url = self.query_url(lat, lng, date);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        let decoded: SunResponse =
            serde_json::from_str(&body).map_err(|source| UpstreamError::Decode { url, source })?;
        if decoded.status != "OK" {
            return Err(UpstreamError::Api(decoded.status));
        }
        Ok(SunTimes {
            sunrise: decoded.results.sunrise,
            sunset: decoded.results.sunset,
        })
    }
}
