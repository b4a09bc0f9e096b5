//! Fee models

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{self, DateContext};

/// Payment state of a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
}

impl FeeStatus {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "paid" | "completed" | "settled" => Some(Self::Paid),
            "pending" | "due" | "unpaid" => Some(Self::Pending),
            "overdue" | "late" => Some(Self::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// A charged fee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    pub id: String,
    /// Student ID (default empty)
    pub student_id: String,
    /// What the fee is for (default `"Monthly Fee"`)
    pub description: String,
    /// Amount (number or decimal string; default 0)
    pub amount: f64,
    /// Due date in the configured format (default: today)
    pub due_date: String,
    /// Payment state (`status`, or boolean `paid`; default `Pending`)
    pub status: FeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
}

impl Fee {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        let status = raw::text(raw, &["status", "paymentStatus"])
            .and_then(|s| FeeStatus::parse(&s))
            .or_else(|| {
                raw::flag(raw, &["paid", "isPaid"])
                    .map(|paid| if paid { FeeStatus::Paid } else { FeeStatus::Pending })
            })
            .unwrap_or(FeeStatus::Pending);

        Self {
            id: raw::text_or(raw, &["id", "_id", "feeId"], "unknown"),
            student_id: raw::text_or(raw, &["studentId", "student.id"], ""),
            description: raw::text_or(raw, &["description", "title", "feeType", "type"], "Monthly Fee"),
            amount: raw::number(raw, &["amount", "total"])
                .filter(|a| a.is_finite())
                .unwrap_or(0.0),
            due_date: dates.date_field(raw, &["dueDate", "due_date", "date"]),
            status,
            paid_date: dates.optional_date_field(raw, &["paidDate", "paidAt", "paymentDate"]),
        }
    }
}

/// Totals across a list of fees
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSummary {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    pub overdue: f64,
}

impl FeeSummary {
    pub fn from_fees(fees: &[Fee]) -> Self {
        fees.iter().fold(Self::default(), |mut acc, fee| {
            acc.total += fee.amount;
            match fee.status {
                FeeStatus::Paid => acc.paid += fee.amount,
                FeeStatus::Pending => acc.pending += fee.amount,
                FeeStatus::Overdue => acc.overdue += fee.amount,
            }
            acc
        })
    }

    /// Amount still owed
    pub fn outstanding(&self) -> f64 {
        self.pending + self.overdue
    }
}
