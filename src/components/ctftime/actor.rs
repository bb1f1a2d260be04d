use super::models::EventRecord;
use super::time::TimeWindow;
use crate::config::SyncSettings;
use crate::error::{component_error, fetch_error, BotResult};
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use tokio::sync::mpsc;
use tracing::{debug, info};
use url::Url;

/// The CTFtime actor that processes fetch requests
pub struct CtftimeActor {
    settings: SyncSettings,
    client: Client,
    command_rx: mpsc::Receiver<CtftimeCommand>,
}

/// Commands that can be sent to the CTFtime actor
pub enum CtftimeCommand {
    FetchEvents(TimeWindow, mpsc::Sender<BotResult<Vec<EventRecord>>>),
    Shutdown,
}

/// Handle for communicating with the CTFtime actor
#[derive(Debug, Clone)]
pub struct CtftimeActorHandle {
    command_tx: mpsc::Sender<CtftimeCommand>,
}

impl CtftimeActorHandle {
    /// Fetch the events starting inside the window
    pub async fn fetch_events(&self, window: TimeWindow) -> BotResult<Vec<EventRecord>> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CtftimeCommand::FetchEvents(window, response_tx))
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BotResult<()> {
        let _ = self.command_tx.send(CtftimeCommand::Shutdown).await;
        Ok(())
    }
}

impl CtftimeActor {
    /// Create a new actor and return its handle
    pub fn new(settings: SyncSettings) -> (Self, CtftimeActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            settings,
            client: Client::new(),
            command_rx,
        };

        (actor, CtftimeActorHandle { command_tx })
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("CTFtime actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CtftimeCommand::FetchEvents(window, response_tx) => {
                    let result = Self::fetch_events(&self.settings, &self.client, window).await;
                    let _ = response_tx.send(result).await;
                }
                CtftimeCommand::Shutdown => {
                    info!("CTFtime actor shutting down");
                    break;
                }
            }
        }

        info!("CTFtime actor shut down");
    }

    /// Perform one GET against the events endpoint.
    ///
    /// Anything but HTTP 200 with a JSON event array is a fetch error. An
    /// empty array is a successful result.
    pub async fn fetch_events(
        settings: &SyncSettings,
        client: &Client,
        window: TimeWindow,
    ) -> BotResult<Vec<EventRecord>> {
        let url = build_events_url(settings, &window)?;
        debug!("Fetching CTFtime events from {}", url);

        let response = client
            .get(url)
            .header(USER_AGENT, settings.user_agent.as_str())
            .send()
            .await
            .map_err(|e| fetch_error(&format!("Failed to fetch events: {}", e)))?;

        if response.status() != StatusCode::OK {
            return Err(fetch_error(&format!(
                "Failed to fetch events: HTTP {}",
                response.status()
            )));
        }

        let events: Vec<EventRecord> = response
            .json()
            .await
            .map_err(|e| fetch_error(&format!("Failed to parse events response: {}", e)))?;

        info!("Fetched {} events from CTFtime", events.len());
        Ok(events)
    }
}

/// Build the listing URL with limit and window query parameters
pub fn build_events_url(settings: &SyncSettings, window: &TimeWindow) -> BotResult<Url> {
    let mut url = Url::parse(&settings.endpoint)
        .map_err(|e| fetch_error(&format!("Failed to parse URL: {}", e)))?;

    url.query_pairs_mut()
        .append_pair("limit", &settings.event_limit.to_string())
        .append_pair("start", &window.start_timestamp().to_string())
        .append_pair("finish", &window.finish_timestamp().to_string());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_events_url_carries_window_and_limit() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let window = TimeWindow::weeks_ahead(now, 1).unwrap();

        let url = build_events_url(&SyncSettings::default(), &window).unwrap();

        assert_eq!(
            url.as_str(),
            "https://ctftime.org/api/v1/events/?limit=20&start=1704067200&finish=1704672000"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_a_fetch_error() {
        let settings = SyncSettings {
            endpoint: "not a url".to_string(),
            ..SyncSettings::default()
        };
        let window = TimeWindow::weeks_ahead(Utc::now(), 1).unwrap();

        assert!(matches!(
            build_events_url(&settings, &window),
            Err(crate::error::Error::Fetch(_))
        ));
    }
}
