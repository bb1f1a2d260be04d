pub mod calendar;
pub mod description;
pub mod filter;
pub mod outcome;
mod sync;

pub use calendar::{CalendarEntry, EntryUpdate, EventCalendar, GuildCalendar, NewEntry};
pub use description::compose_description;
pub use filter::{EventFilter, OnsiteFilter};
pub use outcome::{FailedRecord, SyncOutcome, SyncReport, FETCH_FAILED_MESSAGE};
pub use sync::EventSynchronizer;
