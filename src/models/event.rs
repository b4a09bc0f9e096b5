//! Academy event models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{self, DateContext};

/// Tournament, seminar, grading or other academy event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Event title (default `"Event"`)
    pub title: String,
    /// Description (default empty)
    pub description: String,
    /// Event date in the configured format (default: today)
    pub date: String,
    /// Venue (default `"Main Dojo"`)
    pub location: String,
    /// Event category (default `"General"`)
    pub event_type: String,
    /// Whether registration is open (default false)
    pub registration_open: bool,
}

impl Event {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        Self {
            id: raw::text_or(raw, &["id", "_id", "eventId"], "unknown"),
            title: raw::text_or(raw, &["title", "name"], "Event"),
            description: raw::text_or(raw, &["description", "details"], ""),
            date: dates.date_field(raw, &["date", "eventDate", "startDate", "startsAt"]),
            location: raw::text_or(raw, &["location", "venue", "venue.name"], "Main Dojo"),
            event_type: raw::text_or(raw, &["type", "eventType", "category"], "General"),
            registration_open: raw::flag(raw, &["registrationOpen", "isRegistrationOpen"])
                .unwrap_or(false),
        }
    }

    /// Whether the event falls on or after `dates.today()`.
    /// Events whose date cannot be parsed are kept.
    pub fn is_upcoming(&self, dates: &DateContext) -> bool {
        dates
            .parse(&self.date)
            .map(|date| date >= dates.today())
            .unwrap_or(true)
    }
}
