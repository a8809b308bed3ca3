use std::time::Duration;

/// Public forecast feed of the Japan Meteorological Agency.
pub const DEFAULT_BASE_URL: &str = "https://www.jma.go.jp/bosai/forecast/data/forecast";

/// Settings for the forecast fetcher.
///
/// Built from command-line flags only; there is no config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,

    /// Overall request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: None }
    }
}

impl FetchConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
