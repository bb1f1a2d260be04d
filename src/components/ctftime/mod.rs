mod actor;
mod handle;
pub mod models;
pub mod time;

pub use actor::build_events_url;
pub use handle::CtftimeHandle;
pub use models::EventRecord;
pub use time::TimeWindow;

use crate::error::BotResult;
use async_trait::async_trait;

/// Source of upcoming events for one synchronization run
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the events inside the window.
    ///
    /// `Err` means the fetch failed; `Ok` with an empty list means there is
    /// nothing to sync.
    async fn fetch_events(&self, window: TimeWindow) -> BotResult<Vec<EventRecord>>;
}
