// Periodic GET of the message endpoint. Every tick issues its own request;
// whichever response resolves last owns the status.
use crate::model::{ApiMessage, SourceError};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{info, warn};

pub const FETCH_ERROR_TEXT: &str = "Failed to fetch joke. Please try again later.";
pub const LOADING_TEXT: &str = "Loading joke...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollStatus {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl PollStatus {
    /// What the component shows: the error if any, else the message, else a loading hint.
    pub fn display(&self) -> &str {
        if let Some(error) = &self.error {
            return error;
        }
        self.message.as_deref().unwrap_or(LOADING_TEXT)
    }
}

pub struct ApiPoller {
    client: Client,
    url: String,
    period: Duration,
}

impl ApiPoller {
    pub fn new(client: Client, url: String, period: Duration) -> Self {
        Self { client, url, period }
    }

    /// Fetches immediately, then once per period until the handle is dropped.
    pub fn spawn(self) -> PollerHandle {
        let (status_tx, status_rx) = watch::channel(PollStatus::default());
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let status_tx = Arc::new(status_tx);

        let ticker = tokio::spawn(async move {
            let mut ticks = interval(self.period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let client = self.client.clone();
                let url = self.url.clone();
                let status_tx = status_tx.clone();
                let updates_tx = updates_tx.clone();
                tokio::spawn(async move {
                    let result = fetch_message(&client, &url).await;
                    let mut snapshot = PollStatus::default();
                    status_tx.send_modify(|status| {
                        apply_result(status, result);
                        snapshot = status.clone();
                    });
                    let _ = updates_tx.send(snapshot);
                });
            }
        });

        PollerHandle {
            status: status_rx,
            updates: updates_rx,
            ticker,
        }
    }
}

pub struct PollerHandle {
    status: watch::Receiver<PollStatus>,
    updates: mpsc::UnboundedReceiver<PollStatus>,
    ticker: JoinHandle<()>,
}

impl PollerHandle {
    /// Latest recorded status.
    pub fn status(&self) -> PollStatus {
        self.status.borrow().clone()
    }

    /// Status right after the next response (or failure). Every response is delivered once.
    pub async fn next_update(&mut self) -> Option<PollStatus> {
        self.updates.recv().await
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

pub async fn fetch_message(client: &Client, url: &str) -> Result<String, SourceError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status()));
    }
    let body = response.text().await?;
    let message: ApiMessage = serde_json::from_str(&body)?;
    Ok(message.message)
}

fn apply_result(status: &mut PollStatus, result: Result<String, SourceError>) {
    match result {
        Ok(message) => {
            info!("Received message: {}", message);
            status.message = Some(message);
            status.error = None;
        }
        Err(e) => {
            warn!("Error fetching data: {}", e);
            status.error = Some(FETCH_ERROR_TEXT.to_string());
        }
    }
}
