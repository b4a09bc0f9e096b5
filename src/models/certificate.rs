//! Certificate models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{self, DateContext};

/// Belt or achievement certificate issued to a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Certificate ID (`id`, `_id` or `certificateId`; default `"unknown"`)
    pub id: String,

    /// Title shown on the certificate (default `"Certificate"`)
    pub title: String,

    /// Holder name (`studentName` or `student.name`; default `"Student"`)
    pub student_name: String,

    /// Belt awarded (`beltLevel`, `belt` or `level`; default `"N/A"`)
    pub belt_level: String,

    /// Issue date in the configured format (default: today)
    pub issue_date: String,

    /// Certificate status (default `"Active"`)
    pub status: String,

    /// Issuing instructor or body (default `"Academy"`)
    pub issued_by: String,

    /// Printed certificate number, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
}

impl Certificate {
    /// Normalize one backend certificate record.
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        Self {
            id: raw::text_or(raw, &["id", "_id", "certificateId"], "unknown"),
            title: raw::text_or(raw, &["title", "name"], "Certificate"),
            student_name: raw::text_or(
                raw,
                &["studentName", "student.name", "student_name"],
                "Student",
            ),
            belt_level: raw::text_or(raw, &["beltLevel", "belt", "level", "belt.name"], "N/A"),
            issue_date: dates.date_field(raw, &["issueDate", "issuedAt", "issue_date", "date"]),
            status: raw::text_or(raw, &["status"], "Active"),
            issued_by: raw::text_or(raw, &["issuedBy", "instructor", "instructor.name"], "Academy"),
            certificate_number: raw::text(raw, &["certificateNumber", "number", "serial"]),
        }
    }
}

/// Result of checking a certificate against the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateVerification {
    pub certificate_id: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CertificateVerification {
    /// Normalize a verification payload: `{valid, certificate?, message?}`.
    /// A payload carrying a certificate but no `valid` flag counts as valid.
    pub fn from_backend(certificate_id: &str, data: &Value, dates: &DateContext) -> Self {
        let certificate = raw::field(data, &["certificate"])
            .filter(|c| c.is_object())
            .map(|c| Certificate::from_backend(c, dates));
        let valid = raw::flag(data, &["valid", "isValid", "verified"])
            .unwrap_or(certificate.is_some());

        Self {
            certificate_id: certificate_id.to_string(),
            valid,
            certificate,
            message: raw::text(data, &["message"]),
        }
    }
}
