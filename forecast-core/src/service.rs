//! Runs fetches off the caller's task and reports back over a channel.
//! The receiver side belongs to whoever owns the [`Controller`](crate::Controller).

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    controller::FetchTicket,
    error::FetchError,
    model::RawForecast,
    provider::ForecastSource,
};

/// Completion message for one ticket.
#[derive(Debug)]
pub struct FetchDone {
    pub ticket: FetchTicket,
    pub outcome: Result<RawForecast, FetchError>,
}

#[derive(Debug, Clone)]
pub struct ForecastService {
    source: Arc<dyn ForecastSource>,
    tx: mpsc::UnboundedSender<FetchDone>,
}

impl ForecastService {
    pub fn new(source: Arc<dyn ForecastSource>) -> (Self, mpsc::UnboundedReceiver<FetchDone>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { source, tx }, rx)
    }

    /// Spawn a single fetch for `ticket`. Must be called inside a tokio runtime.
    pub fn request(&self, ticket: FetchTicket) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = source.fetch(ticket.region().area_code()).await;
            if tx.send(FetchDone { ticket, outcome }).is_err() {
                tracing::debug!(region = %ticket.region().slug(), "forecast receiver dropped");
            }
        })
    }
}
