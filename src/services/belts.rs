//! Belt ranking facade

use std::sync::Arc;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::models::{BeltLevel, BeltTest, DateContext, Promotion};

pub struct BeltService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl BeltService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    /// Belt levels, lowest rank first
    pub async fn levels(&self) -> Sourced<Vec<BeltLevel>> {
        let mut levels = fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::BeltLevels).context("belt levels"),
            "levels",
            &self.dates,
            BeltLevel::from_backend,
            samples::belt_levels,
        )
        .await;
        levels.data.sort_by_key(|level| level.rank);
        levels
    }

    pub async fn promotions(&self) -> Sourced<Vec<Promotion>> {
        fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::BeltPromotions).context("belt promotions"),
            "promotions",
            &self.dates,
            Promotion::from_backend,
            samples::promotions,
        )
        .await
    }

    pub async fn tests(&self) -> Sourced<Vec<BeltTest>> {
        fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::BeltTests).context("belt tests"),
            "tests",
            &self.dates,
            BeltTest::from_backend,
            samples::belt_tests,
        )
        .await
    }
}
