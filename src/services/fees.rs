//! Fee facade

use std::sync::Arc;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::models::{DateContext, Fee, FeeSummary};

pub struct FeeService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl FeeService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    /// Fees for one student, or for the signed-in user when `student_id` is
    /// `None`
    pub async fn fees(&self, student_id: Option<&str>) -> Sourced<Vec<Fee>> {
        let request = ApiRequest::get(Endpoint::Fees)
            .query_opt("studentId", student_id)
            .context("fees");
        fetch_list(
            self.api.as_ref(),
            request,
            "fees",
            &self.dates,
            Fee::from_backend,
            samples::fees,
        )
        .await
    }

    pub async fn summary(&self, student_id: Option<&str>) -> Sourced<FeeSummary> {
        self.fees(student_id)
            .await
            .map(|fees| FeeSummary::from_fees(&fees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockDojoApi;
    use crate::client::fixtures::RecordBuilder;
    use crate::error::ApiError;
    use crate::models::FeeStatus;
    use crate::services::Provenance;
    use chrono::NaiveDate;
    use serde_json::json;

    fn dates() -> DateContext {
        DateContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "%Y-%m-%d")
    }

    #[tokio::test]
    async fn test_fee_summary_totals() {
        let mock = MockDojoApi::new()
            .with_data(
                Endpoint::Fees,
                json!({ "fees": [
                    RecordBuilder::fee("F1", 100.0, "paid").build(),
                    RecordBuilder::fee("F2", 50.0, "pending").build(),
                    RecordBuilder::fee("F3", 25.0, "overdue").build(),
                ] }),
            )
            .await;

        let summary = FeeService::new(Arc::new(mock), dates())
            .summary(Some("S1"))
            .await;

        assert_eq!(summary.source, Provenance::Backend);
        assert_eq!(summary.data.total, 175.0);
        assert_eq!(summary.data.paid, 100.0);
        assert_eq!(summary.data.outstanding(), 75.0);
    }

    #[tokio::test]
    async fn test_fees_student_filter_and_fallback() {
        let mock = Arc::new(
            MockDojoApi::new()
                .with_error(
                    Endpoint::Fees,
                    ApiError::Http {
                        status: 500,
                        message: "boom".to_string(),
                    },
                )
                .await,
        );
        let result = FeeService::new(mock.clone(), dates()).fees(Some("S7")).await;

        assert_eq!(result.source, Provenance::MockData);
        assert!(result.data.iter().any(|f| f.status == FeeStatus::Pending));

        let sent = mock.captured_requests().await;
        assert_eq!(sent[0].query, vec![("studentId".to_string(), "S7".to_string())]);
    }
}
