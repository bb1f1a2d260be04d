use crate::error::{config_error, parse_error, BotResult};
use chrono::{DateTime, Duration, Utc};

/// Closed time range of events to request from CTFtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub finish: DateTime<Utc>,
}

impl TimeWindow {
    /// Window from `now` to `now + weeks` weeks.
    ///
    /// Computed in UTC, so the span is always exactly `weeks * 7` days.
    pub fn weeks_ahead(now: DateTime<Utc>, weeks: u32) -> BotResult<Self> {
        if weeks == 0 {
            return Err(config_error("Number of weeks must be positive"));
        }

        let span = Duration::try_weeks(i64::from(weeks))
            .ok_or_else(|| config_error("Number of weeks is too large"))?;
        let finish = now
            .checked_add_signed(span)
            .ok_or_else(|| config_error("Number of weeks is too large"))?;

        Ok(Self { start: now, finish })
    }

    /// Window start as unix seconds
    pub fn start_timestamp(&self) -> i64 {
        self.start.timestamp()
    }

    /// Window finish as unix seconds
    pub fn finish_timestamp(&self) -> i64 {
        self.finish.timestamp()
    }
}

/// Parse a CTFtime timestamp such as `2024-05-18T10:00:00+00:00`
pub fn parse_event_timestamp(value: &str) -> BotResult<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|e| parse_error(&format!("Failed to parse timestamp '{}': {}", value, e)))?;
    Ok(parsed.with_timezone(&Utc))
}
