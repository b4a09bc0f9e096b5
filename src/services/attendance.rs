//! Attendance facade

use std::sync::Arc;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::models::{AttendanceEntry, AttendanceSummary, DateContext};

/// Optional filters for attendance lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    /// Restrict to one student
    pub student_id: Option<String>,
    /// Restrict to one month, `YYYY-MM`
    pub month: Option<String>,
}

impl AttendanceQuery {
    pub fn student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("studentId", self.student_id.clone())
            .query_opt("month", self.month.clone())
    }
}

pub struct AttendanceService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl AttendanceService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    pub async fn attendance(&self, query: &AttendanceQuery) -> Sourced<Vec<AttendanceEntry>> {
        fetch_list(
            self.api.as_ref(),
            query.apply(ApiRequest::get(Endpoint::Attendance).context("attendance")),
            "attendance",
            &self.dates,
            AttendanceEntry::from_backend,
            samples::attendance,
        )
        .await
    }

    /// Present/absent/late counts and attendance rate for `query`
    pub async fn summary(&self, query: &AttendanceQuery) -> Sourced<AttendanceSummary> {
        self.attendance(query)
            .await
            .map(|entries| AttendanceSummary::from_entries(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDojoApi;
    use crate::client::fixtures::RecordBuilder;
    use crate::error::ApiError;
    use crate::services::Provenance;
    use chrono::NaiveDate;
    use serde_json::json;

    fn dates() -> DateContext {
        DateContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "%Y-%m-%d")
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let mock = Arc::new(
            MockDojoApi::new()
                .with_data(Endpoint::Attendance, json!({ "attendance": [] }))
                .await,
        );
        let service = AttendanceService::new(mock.clone(), dates());

        let query = AttendanceQuery::default().student("S1").month("2024-05");
        let result = service.attendance(&query).await;
        assert_eq!(result.source, Provenance::Backend);
        assert!(result.data.is_empty());

        let sent = mock.captured_requests().await;
        assert_eq!(
            sent[0].query,
            vec![
                ("studentId".to_string(), "S1".to_string()),
                ("month".to_string(), "2024-05".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let mock = MockDojoApi::new()
            .with_data(
                Endpoint::Attendance,
                json!({ "attendance": [
                    RecordBuilder::attendance("A1", "present").build(),
                    RecordBuilder::attendance("A2", "late").build(),
                    RecordBuilder::attendance("A3", "absent").build(),
                    RecordBuilder::attendance("A4", "present").build(),
                ] }),
            )
            .await;

        let summary = AttendanceService::new(Arc::new(mock), dates())
            .summary(&AttendanceQuery::default())
            .await;

        assert_eq!(summary.source, Provenance::Backend);
        assert_eq!(summary.data.total, 4);
        assert_eq!(summary.data.present, 2);
        assert_eq!(summary.data.late, 1);
        assert_eq!(summary.data.absent, 1);
        assert_eq!(summary.data.rate, 75.0);
    }

    #[tokio::test]
    async fn test_summary_of_samples() {
        let mock = MockDojoApi::new().failing_with(ApiError::Timeout).await;
        let summary = AttendanceService::new(Arc::new(mock), dates())
            .summary(&AttendanceQuery::default())
            .await;

        assert_eq!(summary.source, Provenance::MockData);
        assert_eq!(summary.data.total, samples::attendance(&dates()).len());
    }
}
