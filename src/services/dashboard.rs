//! Home screen summary, loaded in one go

use futures::join;
use serde::Serialize;

use super::{
    AttendanceQuery, AttendanceService, BeltService, CertificateService, EventService, FeeService,
    Sourced,
};
use crate::models::{AttendanceSummary, BeltLevel, Certificate, Event, FeeSummary};

/// Everything the dashboard shows, each part with its own provenance
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub certificates: Sourced<Vec<Certificate>>,
    pub attendance: Sourced<AttendanceSummary>,
    pub fees: Sourced<FeeSummary>,
    pub upcoming_events: Sourced<Vec<Event>>,
    pub belt_levels: Sourced<Vec<BeltLevel>>,
}

impl DashboardData {
    /// Whether any section is showing sample data
    pub fn uses_samples(&self) -> bool {
        self.certificates.source.is_sample()
            || self.attendance.source.is_sample()
            || self.fees.source.is_sample()
            || self.upcoming_events.source.is_sample()
            || self.belt_levels.source.is_sample()
    }
}

pub struct Dashboard {
    pub certificates: CertificateService,
    pub attendance: AttendanceService,
    pub fees: FeeService,
    pub events: EventService,
    pub belts: BeltService,
}

impl Dashboard {
    /// Fetch every section concurrently.
    pub async fn load(&self) -> DashboardData {
        let query = AttendanceQuery::default();
        let (certificates, attendance, fees, upcoming_events, belt_levels) = join!(
            self.certificates.certificates(),
            self.attendance.summary(&query),
            self.fees.summary(None),
            self.events.upcoming(),
            self.belts.levels(),
        );

        DashboardData {
            certificates,
            attendance,
            fees,
            upcoming_events,
            belt_levels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{DojoApi, Endpoint, MockDojoApi};
    use crate::models::DateContext;
    use crate::services::Provenance;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::sync::Arc;

    fn dashboard(api: Arc<dyn DojoApi>) -> Dashboard {
        let dates = DateContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "%Y-%m-%d");
        Dashboard {
            certificates: CertificateService::new(Arc::clone(&api), dates.clone()),
            attendance: AttendanceService::new(Arc::clone(&api), dates.clone()),
            fees: FeeService::new(Arc::clone(&api), dates.clone()),
            events: EventService::new(Arc::clone(&api), dates.clone()),
            belts: BeltService::new(api, dates),
        }
    }

    #[tokio::test]
    async fn test_mixed_provenance() {
        let mock = Arc::new(
            MockDojoApi::new()
                .with_data(Endpoint::Certificates, json!({ "certificates": [{ "id": "C1" }] }))
                .await
                .with_public_data(Endpoint::BeltLevels, json!({ "levels": [] }))
                .await,
        );

        let data = dashboard(mock.clone()).load().await;

        assert_eq!(data.certificates.source, Provenance::Backend);
        assert_eq!(data.belt_levels.source, Provenance::PublicApi);
        assert_eq!(data.fees.source, Provenance::MockData);
        assert_eq!(data.attendance.source, Provenance::MockData);
        assert!(data.uses_samples());
        assert_eq!(mock.captured_requests().await.len(), 5);
    }

    #[tokio::test]
    async fn test_offline_dashboard_is_fully_populated() {
        let data = dashboard(Arc::new(MockDojoApi::new())).load().await;
        assert!(!data.certificates.data.is_empty());
        assert!(data.attendance.data.total > 0);
        assert!(data.fees.data.total > 0.0);
        assert!(!data.upcoming_events.data.is_empty());
        assert!(!data.belt_levels.data.is_empty());
    }
}
