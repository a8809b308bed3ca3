use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{
    FetchConfig,
    endpoint::build_endpoint,
    error::FetchError,
    model::RawForecast,
    region::AreaCode,
};

use super::ForecastSource;

/// Fetches forecast documents from the JMA bosai feed (or a compatible base URL).
#[derive(Debug, Clone)]
pub struct JmaForecastSource {
    base_url: String,
    http: Client,
}

impl JmaForecastSource {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            http: builder.build()?,
        })
    }

    async fn fetch_document(&self, url: &str) -> Result<RawForecast, FetchError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Http { status, body: truncate_body(&body) });
        }

        let parsed: Value = serde_json::from_str(&body)?;
        Ok(RawForecast::new(parsed))
    }
}

#[async_trait]
impl ForecastSource for JmaForecastSource {
    async fn fetch(&self, code: AreaCode) -> Result<RawForecast, FetchError> {
        let url = build_endpoint(&self.base_url, code);
        tracing::debug!(%url, "fetching forecast");

        self.fetch_document(&url).await.inspect_err(|e| {
            tracing::warn!(%url, area = %code, error = %e, "forecast fetch failed");
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let long = "天".repeat(300);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
