use crate::{FetchConfig, error::FetchError, model::RawForecast, region::AreaCode};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod jma;

pub use jma::JmaForecastSource;

/// One retry-free fetch of the raw forecast document for an area.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, code: AreaCode) -> Result<RawForecast, FetchError>;
}

/// Construct the default HTTP-backed source from config.
pub fn source_from_config(config: &FetchConfig) -> Result<Box<dyn ForecastSource>, FetchError> {
    Ok(Box::new(JmaForecastSource::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn source_from_default_config_builds() {
        assert!(source_from_config(&FetchConfig::default()).is_ok());
    }

    #[test]
    fn source_from_config_with_timeout_builds() {
        let cfg = FetchConfig::default().with_timeout(Duration::from_millis(250));
        assert!(source_from_config(&cfg).is_ok());
    }
}
