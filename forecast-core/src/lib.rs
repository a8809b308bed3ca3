//! Core library for the `forecast` viewer.
//!
//! This crate defines:
//! - The fixed region registry and endpoint construction
//! - Fetching raw forecast documents from the provider
//! - Normalizing and extracting the "today" and "three-day" summaries
//! - The view-state controller that ties fetches to user selections
//!
//! It is used by `forecast-cli`, but carries no terminal code of its own.

pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod region;
pub mod service;

pub use config::{DEFAULT_BASE_URL, FetchConfig};
pub use controller::{Controller, FetchTicket, ViewMode, ViewState};
pub use endpoint::build_endpoint;
pub use error::{ExtractError, FetchError, PARSE_FAILED_MESSAGE, RETRIEVE_FAILED_MESSAGE};
pub use extract::{extract_three_day, extract_today};
pub use model::{DaySummary, RawForecast, TodaySummary, UNKNOWN};
pub use normalize::{classify_weather, format_day_label, format_day_label_in};
pub use provider::{ForecastSource, JmaForecastSource, source_from_config};
pub use region::{AreaCode, Region};
pub use service::{FetchDone, ForecastService};
