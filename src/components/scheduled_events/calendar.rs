use crate::error::{platform_error, BotResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;
use serenity::{
    CreateScheduledEvent, EditScheduledEvent, GuildId, Http, ScheduledEvent, ScheduledEventId,
    ScheduledEventType, Timestamp,
};
use std::sync::Arc;
use tracing::debug;

/// Discord limit for scheduled event names
pub const MAX_NAME_LEN: usize = 100;
/// Discord limit for scheduled event descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;
/// Discord limit for external event locations
pub const MAX_LOCATION_LEN: usize = 100;

/// An existing scheduled event, as read from the guild before a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: u64,
    pub title: String,
}

/// Fields of a scheduled event to create.
///
/// Entries are always external and guild-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
}

/// Fields rewritten on an existing scheduled event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: String,
}

/// Scheduled-events calendar of one guild
#[async_trait]
pub trait EventCalendar: Send + Sync {
    /// List the scheduled events that currently exist
    async fn list_entries(&self) -> BotResult<Vec<CalendarEntry>>;

    /// Create a new external, guild-only scheduled event
    async fn create_entry(&self, entry: &NewEntry) -> BotResult<()>;

    /// Edit the scheduled event with the given id
    async fn edit_entry(&self, id: u64, update: &EntryUpdate) -> BotResult<()>;
}

/// [`EventCalendar`] backed by the Discord guild scheduled events API
#[derive(Clone)]
pub struct GuildCalendar {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl GuildCalendar {
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl EventCalendar for GuildCalendar {
    async fn list_entries(&self) -> BotResult<Vec<CalendarEntry>> {
        let events = self
            .guild_id
            .scheduled_events(&*self.http, false)
            .await
            .map_err(|e| platform_error(&format!("Failed to list scheduled events: {}", e)))?;

        debug!("Guild {} has {} scheduled events", self.guild_id, events.len());
        Ok(events.iter().map(calendar_entry).collect())
    }

    async fn create_entry(&self, entry: &NewEntry) -> BotResult<()> {
        let builder = CreateScheduledEvent::new(
            ScheduledEventType::External,
            entry.name.as_str(),
            to_timestamp(entry.start)?,
        )
        .description(entry.description.as_str())
        .end_time(to_timestamp(entry.end)?)
        .location(entry.location.as_str());

        self.guild_id
            .create_scheduled_event(&*self.http, builder)
            .await
            .map_err(|e| platform_error(&format!("Failed to create '{}': {}", entry.name, e)))?;

        Ok(())
    }

    async fn edit_entry(&self, id: u64, update: &EntryUpdate) -> BotResult<()> {
        let builder = EditScheduledEvent::new()
            .description(update.description.as_str())
            .start_time(to_timestamp(update.start)?)
            .end_time(to_timestamp(update.end)?)
            .kind(ScheduledEventType::External)
            .location(update.location.as_str());

        self.guild_id
            .edit_scheduled_event(&*self.http, ScheduledEventId::new(id), builder)
            .await
            .map_err(|e| platform_error(&format!("Failed to edit scheduled event {}: {}", id, e)))?;

        Ok(())
    }
}

fn calendar_entry(event: &ScheduledEvent) -> CalendarEntry {
    CalendarEntry {
        id: event.id.get(),
        title: event.name.clone(),
    }
}

fn to_timestamp(instant: DateTime<Utc>) -> BotResult<Timestamp> {
    Timestamp::from_unix_timestamp(instant.timestamp())
        .map_err(|e| platform_error(&format!("Invalid timestamp {}: {}", instant, e)))
}
