//! Student roster facade

use std::sync::Arc;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::models::{DateContext, Student};

pub struct StudentService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl StudentService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    pub async fn students(&self) -> Sourced<Vec<Student>> {
        fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::Students).context("students"),
            "students",
            &self.dates,
            Student::from_backend,
            samples::students,
        )
        .await
    }
}
