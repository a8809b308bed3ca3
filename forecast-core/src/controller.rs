//! View state and the transitions that mutate it.
//!
//! The controller exclusively owns [`ViewState`]. Each region selection
//! issues a [`FetchTicket`]; a fetch result is applied only if its ticket is
//! the one still pending, so a slow response for a region the user has
//! already left cannot overwrite the newer selection.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    error::{FetchError, PARSE_FAILED_MESSAGE},
    extract::{extract_three_day, extract_today},
    model::{DaySummary, RawForecast, TodaySummary},
    provider::ForecastSource,
    region::Region,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Today,
    ThreeDay,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Today => "today",
            ViewMode::ThreeDay => "three-day",
        }
    }

    pub const fn all() -> &'static [ViewMode] {
        &[ViewMode::Today, ViewMode::ThreeDay]
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view mode '{0}'. Supported view modes: today, three-day.")]
pub struct UnknownViewMode(String);

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(ViewMode::Today),
            "three-day" | "three_day" | "3day" => Ok(ViewMode::ThreeDay),
            _ => Err(UnknownViewMode(s.to_string())),
        }
    }
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selected_region: Region,
    pub today: Option<TodaySummary>,
    pub three_day: Option<Vec<DaySummary>>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub view_mode: ViewMode,
}

impl ViewState {
    pub fn new(region: Region) -> Self {
        Self {
            selected_region: region,
            today: None,
            three_day: None,
            error: None,
            is_loading: false,
            view_mode: ViewMode::default(),
        }
    }
}

/// Identifies one outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    region: Region,
    generation: u64,
}

impl FetchTicket {
    pub fn region(&self) -> Region {
        self.region
    }
}

#[derive(Debug)]
pub struct Controller {
    state: ViewState,
    generation: u64,
    pending: Option<u64>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Region::default())
    }
}

impl Controller {
    pub fn new(region: Region) -> Self {
        Self { state: ViewState::new(region), generation: 0, pending: None }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start loading `region`. The returned ticket must accompany the fetch result.
    pub fn select_region(&mut self, region: Region) -> FetchTicket {
        self.generation += 1;
        self.pending = Some(self.generation);

        self.state.selected_region = region;
        self.state.is_loading = true;
        self.state.error = None;
        self.state.today = None;
        self.state.three_day = None;

        FetchTicket { region, generation: self.generation }
    }

    /// Independent of loading/error state; always allowed.
    pub fn select_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    pub fn is_pending(&self, ticket: FetchTicket) -> bool {
        self.pending == Some(ticket.generation) && self.state.selected_region == ticket.region
    }

    /// Apply a fetch result. Returns `false` (leaving state untouched) when the
    /// ticket is stale or was already completed.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<RawForecast, FetchError>,
    ) -> bool {
        if !self.is_pending(ticket) {
            tracing::debug!(
                region = %ticket.region.slug(),
                generation = ticket.generation,
                current = self.generation,
                "dropping stale forecast result"
            );
            return false;
        }
        self.pending = None;

        match outcome {
            Ok(payload) => self.apply_payload(&payload),
            Err(e) => self.state.error = Some(e.user_message().to_string()),
        }
        self.state.is_loading = false;

        true
    }

    /// Select `region`, fetch it from `source` and apply the result in one step.
    pub async fn refresh(&mut self, source: &dyn ForecastSource, region: Region) -> bool {
        let ticket = self.select_region(region);
        let outcome = source.fetch(region.area_code()).await;
        self.complete(ticket, outcome)
    }

    fn apply_payload(&mut self, payload: &RawForecast) {
        let region = self.state.selected_region.slug();

        let today = extract_today(payload)
            .inspect_err(|e| tracing::warn!(region, error = %e, "today summary unavailable"))
            .ok();
        let three_day = extract_three_day(payload)
            .inspect_err(|e| tracing::warn!(region, error = %e, "three-day summary unavailable"))
            .ok();

        if today.is_none() && three_day.is_none() {
            self.state.error = Some(PARSE_FAILED_MESSAGE.to_string());
        }

        self.state.today = today;
        self.state.three_day = three_day;
    }
}
