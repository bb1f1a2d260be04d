/// Reply sent when CTFtime could not be queried
pub const FETCH_FAILED_MESSAGE: &str = "Error! No events found using API";

/// A record that could not be mirrored, with the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRecord {
    pub title: String,
    pub reason: String,
}

/// Titles sorted into what happened to them during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedRecord>,
}

impl SyncOutcome {
    /// Human-readable summary for the invoking user
    pub fn summary(&self) -> String {
        let mut message = String::from("Event update summary:\n");

        if !self.created.is_empty() {
            message.push_str(&format!("Created events: {}\n", self.created.join(", ")));
        }
        if !self.updated.is_empty() {
            message.push_str(&format!("Updated events: {}\n", self.updated.join(", ")));
        }
        if self.created.is_empty() && self.updated.is_empty() {
            message.push_str("No events were created or updated.\n");
        }
        if !self.failed.is_empty() {
            let failed = self
                .failed
                .iter()
                .map(|f| format!("{} ({})", f.title, f.reason))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!("Failed events: {}\n", failed));
        }

        message
    }
}

/// Terminal state of a synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncReport {
    /// CTFtime could not be queried; nothing was touched
    FetchFailed(String),
    Completed(SyncOutcome),
}

impl SyncReport {
    /// Text relayed back to the user
    pub fn message(&self) -> String {
        match self {
            SyncReport::FetchFailed(_) => FETCH_FAILED_MESSAGE.to_string(),
            SyncReport::Completed(outcome) => outcome.summary(),
        }
    }
}
