use super::actor::CtftimeActorHandle;
use super::models::EventRecord;
use super::time::TimeWindow;
use super::EventSource;
use crate::config::SyncSettings;
use crate::error::BotResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the CTFtime actor
#[derive(Debug, Clone)]
pub struct CtftimeHandle {
    actor_handle: CtftimeActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CtftimeHandle {
    /// Create a new CtftimeHandle and spawn the actor
    pub fn new(settings: SyncSettings) -> Self {
        use super::actor::CtftimeActor;

        let (mut actor, handle) = CtftimeActor::new(settings);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch upcoming events inside the window
    pub async fn fetch_events(&self, window: TimeWindow) -> BotResult<Vec<EventRecord>> {
        self.actor_handle.fetch_events(window).await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BotResult<()> {
        self.actor_handle.shutdown().await
    }
}

#[async_trait]
impl EventSource for CtftimeHandle {
    async fn fetch_events(&self, window: TimeWindow) -> BotResult<Vec<EventRecord>> {
        CtftimeHandle::fetch_events(self, window).await
    }
}
