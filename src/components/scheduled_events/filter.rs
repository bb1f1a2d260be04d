use crate::components::ctftime::EventRecord;

/// Eligibility rule deciding which fetched events are mirrored
pub trait EventFilter: Send + Sync {
    fn admits(&self, record: &EventRecord) -> bool;
}

/// Online events always pass; onsite events pass only when their location
/// mentions the configured region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnsiteFilter {
    region: String,
}

impl OnsiteFilter {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Default for OnsiteFilter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_ONSITE_REGION)
    }
}

impl EventFilter for OnsiteFilter {
    fn admits(&self, record: &EventRecord) -> bool {
        !record.onsite || record.location.contains(&self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(onsite: bool, location: &str) -> EventRecord {
        EventRecord {
            title: "Test CTF".to_string(),
            onsite,
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_online_events_always_pass() {
        let filter = OnsiteFilter::default();
        assert!(filter.admits(&record(false, "")));
        assert!(filter.admits(&record(false, "Las Vegas, USA")));
    }

    #[test]
    fn test_onsite_events_need_region() {
        let filter = OnsiteFilter::default();
        assert!(filter.admits(&record(true, "IIT Bombay, Mumbai, India")));
        assert!(!filter.admits(&record(true, "Remote")));
        assert!(!filter.admits(&record(true, "")));
    }

    #[test]
    fn test_region_match_is_case_sensitive() {
        let filter = OnsiteFilter::default();
        assert!(!filter.admits(&record(true, "india")));
    }

    #[test]
    fn test_region_is_configurable() {
        let filter = OnsiteFilter::new("Finland");
        assert_eq!(filter.region(), "Finland");
        assert!(filter.admits(&record(true, "Helsinki, Finland")));
        assert!(!filter.admits(&record(true, "Pune, India")));
    }
}
