use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::backend::{default_description, AdviceBackend};
use crate::error::ApiError;
use crate::model::{
    AdvicePayload, AdviceResponse, CreateDestinationRequest, DestinationId, DestinationList,
    DestinationRef, GenerateAdviceRequest,
};

#[derive(Clone, Debug)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl ApiClientConfig {
    /// Unset variables take their defaults; set but malformed ones are rejected.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("ADVISOR_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        let timeout = match std::env::var("ADVISOR_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(parse_setting("ADVISOR_TIMEOUT_SECS", &raw)?),
            Err(_) => Duration::from_secs(30),
        };

        let max_error_body_bytes = match std::env::var("ADVISOR_MAX_ERROR_BODY_BYTES") {
            Ok(raw) => parse_setting("ADVISOR_MAX_ERROR_BODY_BYTES", &raw)?,
            Err(_) => 8 * 1024,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            max_error_body_bytes,
        })
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            max_error_body_bytes: 8 * 1024,
        }
    }
}

/// HTTP client for the `/api/destinations/` REST surface.
#[derive(Clone)]
pub struct AdvisorClient {
    config: ApiClientConfig,
    base: Url,
    http: reqwest::Client,
}

impl AdvisorClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url.clone()));
        }
        let http = reqwest::Client::builder()
            .user_agent("travel-advisor")
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, base, http })
    }

    /// Builds `{base}/seg/seg/.../` with every segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    async fn find_destination(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Option<DestinationId>, ApiError> {
        let url = self.endpoint(&["api", "destinations"])?;
        debug!(%url, city, country, "looking up destination");
        let resp = self
            .http
            .get(url)
            .query(&[("name", city), ("country", country)])
            .send()
            .await?;
        let list: DestinationList =
            Self::parse_json_response(resp, self.config.max_error_body_bytes).await?;
        Ok(list.results.into_iter().next().map(|d| d.id))
    }

    async fn create_destination(
        &self,
        city: &str,
        country: &str,
    ) -> Result<DestinationId, ApiError> {
        let url = self.endpoint(&["api", "destinations"])?;
        debug!(%url, city, country, "creating destination");
        let body = CreateDestinationRequest {
            name: city,
            country,
            description: default_description(city, country),
        };
        let resp = self.http.post(url).json(&body).send().await?;
        let created: DestinationRef =
            Self::parse_json_response(resp, self.config.max_error_body_bytes).await?;
        Ok(created.id)
    }

    async fn parse_json_response<T: for<'de> Deserialize<'de>>(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = read_limited_text(resp, max_error_body_bytes).await;
            return Err(ApiError::Upstream { status, body });
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl AdviceBackend for AdvisorClient {
    async fn resolve_or_create_destination(
        &self,
        city: &str,
        country: &str,
    ) -> Result<DestinationId, ApiError> {
        if let Some(id) = self.find_destination(city, country).await? {
            debug!(%id, "destination exists");
            return Ok(id);
        }
        let id = self.create_destination(city, country).await?;
        debug!(%id, "destination created");
        Ok(id)
    }

    async fn trigger_advice_generation(
        &self,
        destination_id: &DestinationId,
        hobbies: Option<&str>,
        follow_up_question: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&[
            "api",
            "destinations",
            destination_id.as_str(),
            "generate_advice",
        ])?;
        let request = GenerateAdviceRequest {
            hobbies: non_empty(hobbies),
            follow_up_question: non_empty(follow_up_question),
        };

        let mut builder = self.http.post(url);
        if !request.is_empty() {
            builder = builder.json(&request);
        }
        debug!(
            id = %destination_id,
            with_body = !request.is_empty(),
            "triggering advice generation"
        );

        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = read_limited_text(resp, self.config.max_error_body_bytes).await;
            return Err(ApiError::Generation { status, body });
        }
        Ok(())
    }

    /// The response status is not inspected: whatever JSON the backend sends
    /// is decoded leniently, and a body without advice (such as a 404
    /// `{"detail": ...}`) yields a payload with no items.
    async fn fetch_advice(
        &self,
        destination_id: &DestinationId,
    ) -> Result<AdvicePayload, ApiError> {
        let url = self.endpoint(&["api", "destinations", destination_id.as_str()])?;
        debug!(%url, "fetching advice");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%status, id = %destination_id, "advice fetch returned non-success status");
        }
        let bytes = resp.bytes().await?;
        let response: AdviceResponse = serde_json::from_slice(&bytes)?;
        Ok(response.into_payload(destination_id))
    }
}

fn parse_setting<T: FromStr>(name: &str, raw: &str) -> Result<T, ApiError> {
    raw.trim().parse::<T>().map_err(|_| {
        ApiError::Config(format!("{name} must be a non-negative integer, got {raw:?}"))
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read backend error body");
            "<failed to read error body>".to_string()
        }
    }
}
