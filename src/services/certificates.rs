//! Certificate facade

use std::sync::Arc;

use log::warn;
use serde_json::json;

use super::{Sourced, fetch_list, samples};
use crate::client::{ApiRequest, DojoApi, Endpoint};
use crate::error::ApiResult;
use crate::models::{Certificate, CertificateVerification, DateContext};

pub struct CertificateService {
    api: Arc<dyn DojoApi>,
    dates: DateContext,
}

impl CertificateService {
    pub fn new(api: Arc<dyn DojoApi>, dates: DateContext) -> Self {
        Self { api, dates }
    }

    /// Certificates visible to the signed-in user
    pub async fn certificates(&self) -> Sourced<Vec<Certificate>> {
        fetch_list(
            self.api.as_ref(),
            ApiRequest::get(Endpoint::Certificates).context("certificates"),
            "certificates",
            &self.dates,
            Certificate::from_backend,
            samples::certificates,
        )
        .await
    }

    /// Check a certificate ID or number against the registry.
    ///
    /// When the backend cannot answer, the ID is checked against the
    /// bundled sample certificates instead.
    pub async fn verify(&self, certificate_id: &str) -> Sourced<CertificateVerification> {
        let certificate_id = certificate_id.trim();
        match self.verify_remote(certificate_id).await {
            Ok(result) => result,
            Err(e) => {
                warn!("verify {}: checking sample certificates ({})", certificate_id, e);
                Sourced::samples(self.verify_locally(certificate_id))
            }
        }
    }

    async fn verify_remote(&self, certificate_id: &str) -> ApiResult<Sourced<CertificateVerification>> {
        let request = ApiRequest::post(Endpoint::VerifyCertificate)
            .json(&json!({ "certificateId": certificate_id }))
            .context("verify certificate");
        let routed = self.api.call(request).await?;
        let data = routed.value.data()?;
        Ok(Sourced::new(
            CertificateVerification::from_backend(certificate_id, data, &self.dates),
            routed.route.into(),
        ))
    }

    fn verify_locally(&self, certificate_id: &str) -> CertificateVerification {
        let found = samples::certificates(&self.dates).into_iter().find(|c| {
            c.id.eq_ignore_ascii_case(certificate_id)
                || c.certificate_number
                    .as_deref()
                    .is_some_and(|n| n.eq_ignore_ascii_case(certificate_id))
        });

        CertificateVerification {
            certificate_id: certificate_id.to_string(),
            valid: found.is_some(),
            message: Some(if found.is_some() {
                "Certificate found in offline records".to_string()
            } else {
                "Certificate not found".to_string()
            }),
            certificate: found,
        }
    }
}
