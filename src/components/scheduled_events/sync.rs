use super::calendar::{EntryUpdate, EventCalendar, NewEntry, MAX_DESCRIPTION_LEN, MAX_LOCATION_LEN, MAX_NAME_LEN};
use super::description::{clamp, compose_description};
use super::filter::EventFilter;
use super::outcome::{FailedRecord, SyncOutcome, SyncReport};
use crate::components::ctftime::{EventRecord, EventSource, TimeWindow};
use crate::error::BotResult;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// What the synchronizer did with one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyncAction {
    Created,
    Updated,
}

/// Mirrors fetched CTFtime events into a guild calendar
pub struct EventSynchronizer<'a> {
    source: &'a dyn EventSource,
    calendar: &'a dyn EventCalendar,
    filter: &'a dyn EventFilter,
}

impl<'a> EventSynchronizer<'a> {
    pub fn new(
        source: &'a dyn EventSource,
        calendar: &'a dyn EventCalendar,
        filter: &'a dyn EventFilter,
    ) -> Self {
        Self {
            source,
            calendar,
            filter,
        }
    }

    /// Run one synchronization over the window.
    ///
    /// A failed fetch ends the run before the calendar is touched. Records
    /// are processed one at a time against the title snapshot taken before
    /// the loop; a record that fails to parse or is rejected by the platform
    /// is reported and the run continues. Only a failure to list the
    /// existing entries aborts with an error.
    pub async fn run(&self, window: TimeWindow) -> BotResult<SyncReport> {
        let records = match self.source.fetch_events(window).await {
            Ok(records) => records,
            Err(e) => {
                warn!("CTFtime fetch failed: {}", e);
                return Ok(SyncReport::FetchFailed(e.to_string()));
            }
        };

        let existing: HashMap<String, u64> = self
            .calendar
            .list_entries()
            .await?
            .into_iter()
            .map(|entry| (entry.title, entry.id))
            .collect();

        let mut outcome = SyncOutcome::default();

        for record in &records {
            if !self.filter.admits(record) {
                debug!("Skipping onsite event '{}' at '{}'", record.title, record.location);
                outcome.skipped.push(record.title.clone());
                continue;
            }

            match self.sync_record(record, &existing).await {
                Ok(SyncAction::Created) => outcome.created.push(record.title.clone()),
                Ok(SyncAction::Updated) => outcome.updated.push(record.title.clone()),
                Err(e) => {
                    warn!("Failed to sync event '{}': {}", record.title, e);
                    outcome.failed.push(FailedRecord {
                        title: record.title.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "CTFtime sync finished: {} created, {} updated, {} skipped, {} failed",
            outcome.created.len(),
            outcome.updated.len(),
            outcome.skipped.len(),
            outcome.failed.len()
        );

        Ok(SyncReport::Completed(outcome))
    }

    async fn sync_record(
        &self,
        record: &EventRecord,
        existing: &HashMap<String, u64>,
    ) -> BotResult<SyncAction> {
        let description = clamp(&compose_description(record), MAX_DESCRIPTION_LEN);
        let start = record.start_time()?;
        let end = record.finish_time()?;
        let location = clamp(&record.url, MAX_LOCATION_LEN);
        let name = clamp(&record.title, MAX_NAME_LEN);

        match existing.get(&name) {
            Some(&id) => {
                debug!("Updating scheduled event {} for '{}'", id, record.title);
                let update = EntryUpdate {
                    description,
                    start,
                    end,
                    location,
                };
                self.calendar.edit_entry(id, &update).await?;
                Ok(SyncAction::Updated)
            }
            None => {
                debug!("Creating scheduled event for '{}'", record.title);
                let entry = NewEntry {
                    name,
                    description,
                    start,
                    end,
                    location,
                };
                self.calendar.create_entry(&entry).await?;
                Ok(SyncAction::Created)
            }
        }
    }
}
