use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    config::Config,
    model::{PredictionRequest, PredictionResponse},
};

/// Backend that turns a location (and optional power rating) into a forecast.
#[async_trait]
pub trait PredictionService: Send + Sync + Debug {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;
}

/// HTTP client for the `/predict` endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictClient {
    base_url: String,
    http: Client,
}

impl HttpPredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl PredictionService for HttpPredictClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.predict_url();
        debug!("POST {url}: {request:?}");

        let res = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .context("Failed to send request to the prediction service")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read prediction response body")?;

        if !status.is_success() {
            // Status and body go to the debug log only; the user sees the
            // generic failure message.
            debug!("prediction service returned {status}: {}", truncate_body(&body));
            return Err(anyhow!("Prediction request failed."));
        }

        let parsed: PredictionResponse =
            serde_json::from_str(&body).context("Failed to parse prediction JSON")?;

        debug!("received {} prediction entries", parsed.predictions.len());
        Ok(parsed)
    }
}

/// Build the client against the configured (or default) server.
pub fn service_from_config(config: &Config) -> Box<dyn PredictionService> {
    Box::new(HttpPredictClient::new(config.server_url()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}
