//! Event facade

use std::sync::Arc;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::models::{DateContext, Event};

pub struct EventService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl EventService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    pub async fn events(&self) -> Sourced<Vec<Event>> {
        fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::Events).context("events"),
            "events",
            &self.dates,
            Event::from_backend,
            samples::events,
        )
        .await
    }

    /// Events on or after today, soonest first
    pub async fn upcoming(&self) -> Sourced<Vec<Event>> {
        let dates = &self.dates;
        self.events().await.map(|events| {
            let mut upcoming: Vec<Event> =
                events.into_iter().filter(|e| e.is_upcoming(dates)).collect();
            upcoming.sort_by_key(|e| dates.parse(&e.date));
            upcoming
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDojoApi;
    use crate::client::fixtures::RecordBuilder;
    use crate::services::Provenance;
    use chrono::NaiveDate;
    use serde_json::json;

    fn dates() -> DateContext {
        DateContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "%Y-%m-%d")
    }

    #[tokio::test]
    async fn test_upcoming_filters_and_sorts() {
        let mock = MockDojoApi::new()
            .with_data(
                Endpoint::Events,
                json!({ "events": [
                    RecordBuilder::event("past", "2024-05-01").build(),
                    RecordBuilder::event("later", "2024-08-10").build(),
                    RecordBuilder::event("today", "2024-06-01").build(),
                    RecordBuilder::event("soon", "2024-06-15T18:00:00Z").build(),
                ] }),
            )
            .await;

        let upcoming = EventService::new(Arc::new(mock), dates()).upcoming().await;
        assert_eq!(upcoming.source, Provenance::Backend);
        let ids: Vec<&str> = upcoming.data.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "soon", "later"]);
    }

    #[tokio::test]
    async fn test_events_offline() {
        let upcoming = EventService::new(Arc::new(MockDojoApi::new()), dates())
            .upcoming()
            .await;
        assert_eq!(upcoming.source, Provenance::MockData);
        assert_eq!(upcoming.data.len(), samples::events(&dates()).len());
    }
}
