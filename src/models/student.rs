//! Student and attendance models

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{self, DateContext};

/// Enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    /// Full name (`name`, or `firstName` + `lastName`; default `"Student"`)
    pub name: String,
    /// Contact email (default empty)
    pub email: String,
    /// Current belt (default `"White Belt"`)
    pub belt_level: String,
    /// Enrolment status (default `"Active"`)
    pub status: String,
    /// Enrolment date in the configured format (default: today)
    pub join_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Student {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        let name = raw::text(raw, &["name", "fullName"]).or_else(|| {
            let parts: Vec<String> = [
                raw::text(raw, &["firstName", "first_name"]),
                raw::text(raw, &["lastName", "last_name"]),
            ]
            .into_iter()
            .flatten()
            .collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        });

        Self {
            id: raw::text_or(raw, &["id", "_id", "studentId"], "unknown"),
            name: name.unwrap_or_else(|| "Student".to_string()),
            email: raw::text_or(raw, &["email"], ""),
            belt_level: raw::text_or(
                raw,
                &["beltLevel", "currentBelt", "belt", "belt.name"],
                "White Belt",
            ),
            status: raw::text_or(raw, &["status"], "Active"),
            join_date: dates.date_field(raw, &["joinDate", "enrollmentDate", "createdAt"]),
            phone: raw::text(raw, &["phone", "phoneNumber"]),
        }
    }
}

/// Attendance mark for one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    /// Lenient parse; anything unrecognised is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "present" | "p" | "attended" | "true" => Some(Self::Present),
            "absent" | "a" | "missed" | "false" => Some(Self::Absent),
            "late" | "l" | "tardy" => Some(Self::Late),
            "excused" | "e" | "leave" => Some(Self::Excused),
            _ => None,
        }
    }

    /// Whether the student was in class
    pub fn attended(&self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Late => "Late",
            Self::Excused => "Excused",
        };
        f.write_str(label)
    }
}

/// One attendance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: String,
    /// Student ID (default empty)
    pub student_id: String,
    /// Student name (default `"Student"`)
    pub student_name: String,
    /// Class date in the configured format (default: today)
    pub date: String,
    /// Attendance mark (`status`, or boolean `present`; default `Present`)
    pub status: AttendanceStatus,
    /// Class name (default `"General Class"`)
    pub class_name: String,
}

impl AttendanceEntry {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        let status = raw::text(raw, &["status"])
            .and_then(|s| AttendanceStatus::parse(&s))
            .or_else(|| {
                raw::flag(raw, &["present", "attended"]).map(|present| {
                    if present {
                        AttendanceStatus::Present
                    } else {
                        AttendanceStatus::Absent
                    }
                })
            })
            .unwrap_or(AttendanceStatus::Present);

        Self {
            id: raw::text_or(raw, &["id", "_id"], "unknown"),
            student_id: raw::text_or(raw, &["studentId", "student.id", "student_id"], ""),
            student_name: raw::text_or(raw, &["studentName", "student.name"], "Student"),
            date: dates.date_field(raw, &["date", "classDate", "createdAt"]),
            status,
            class_name: raw::text_or(raw, &["className", "class", "class.name"], "General Class"),
        }
    }
}

/// Aggregated attendance counts
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    /// Share of classes attended (present or late), 0-100
    pub rate: f64,
}

impl AttendanceSummary {
    pub fn from_entries(entries: &[AttendanceEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Excused => summary.excused += 1,
            }
        }
        if summary.total > 0 {
            let attended = (summary.present + summary.late) as f64;
            summary.rate = (attended / summary.total as f64 * 1000.0).round() / 10.0;
        }
        summary
    }
}
