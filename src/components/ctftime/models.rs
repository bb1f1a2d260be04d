use super::time::parse_event_timestamp;
use crate::error::BotResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Restriction text CTFtime uses for events anyone can join
pub const OPEN_RESTRICTION: &str = "Open";

/// A single event as returned by the CTFtime events API
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct EventRecord {
    pub title: String,
    pub start: String,
    pub finish: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub format: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prizes: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub restrictions: String,
    #[serde(default)]
    pub onsite: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ctftime_url: String,
}

impl EventRecord {
    /// Whether anyone may participate
    pub fn is_open(&self) -> bool {
        self.restrictions == OPEN_RESTRICTION
    }

    /// Start of the event as a UTC instant
    pub fn start_time(&self) -> BotResult<DateTime<Utc>> {
        parse_event_timestamp(&self.start)
    }

    /// End of the event as a UTC instant
    pub fn finish_time(&self) -> BotResult<DateTime<Utc>> {
        parse_event_timestamp(&self.finish)
    }
}

// CTFtime occasionally sends null for free-text fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ctftime_payload() {
        let body = r#"[{
            "organizers": [{"id": 1, "name": "Team"}],
            "onsite": false,
            "finish": "2024-05-19T10:00:00+00:00",
            "description": "Jeopardy CTF",
            "weight": 24.5,
            "title": "Example CTF 2024",
            "url": "https://example.org/",
            "is_votable_now": false,
            "restrictions": "Open",
            "format": "Jeopardy",
            "start": "2024-05-18T10:00:00+00:00",
            "participants": 120,
            "ctftime_url": "https://ctftime.org/event/1/",
            "location": "",
            "live_feed": "",
            "public_votable": true,
            "duration": {"hours": 0, "days": 1},
            "logo": "",
            "format_id": 1,
            "id": 1,
            "ctf_id": 1,
            "prizes": null
        }]"#;

        let records: Vec<EventRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.title, "Example CTF 2024");
        assert_eq!(record.weight, 24.5);
        assert_eq!(record.prizes, "");
        assert!(record.is_open());
        assert!(!record.onsite);
        assert_eq!(record.start_time().unwrap().to_rfc3339(), "2024-05-18T10:00:00+00:00");
    }

    #[test]
    fn test_missing_location_defaults_to_empty() {
        let body = r#"{"title": "T", "start": "2024-01-01T00:00:00+00:00", "finish": "2024-01-02T00:00:00+00:00", "onsite": true}"#;
        let record: EventRecord = serde_json::from_str(body).unwrap();
        assert!(record.onsite);
        assert!(record.location.is_empty());
    }
}
