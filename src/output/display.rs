//! Table row models
//!
//! Each row type picks the columns worth showing in a terminal for one
//! record type. JSON output serializes the records themselves.

use dojo_client::models::{
    AttendanceEntry, BeltLevel, BeltTest, Certificate, Event, Fee, Promotion, Student,
};
use tabled::Tabled;

#[derive(Debug, Clone, Tabled)]
pub struct CertificateRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "TITLE")]
    pub title: String,
    #[tabled(rename = "STUDENT")]
    pub student: String,
    #[tabled(rename = "BELT")]
    pub belt: String,
    #[tabled(rename = "ISSUED")]
    pub issued: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Certificate> for CertificateRow {
    fn from(c: &Certificate) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            student: c.student_name.clone(),
            belt: c.belt_level.clone(),
            issued: c.issue_date.clone(),
            status: c.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct StudentRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "EMAIL")]
    pub email: String,
    #[tabled(rename = "BELT")]
    pub belt: String,
    #[tabled(rename = "JOINED")]
    pub joined: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Student> for StudentRow {
    fn from(s: &Student) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            email: s.email.clone(),
            belt: s.belt_level.clone(),
            joined: s.join_date.clone(),
            status: s.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct AttendanceRow {
    #[tabled(rename = "DATE")]
    pub date: String,
    #[tabled(rename = "STUDENT")]
    pub student: String,
    #[tabled(rename = "CLASS")]
    pub class: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&AttendanceEntry> for AttendanceRow {
    fn from(a: &AttendanceEntry) -> Self {
        Self {
            date: a.date.clone(),
            student: a.student_name.clone(),
            class: a.class_name.clone(),
            status: a.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct FeeRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
    #[tabled(rename = "AMOUNT")]
    pub amount: String,
    #[tabled(rename = "DUE")]
    pub due: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "PAID ON")]
    pub paid_on: String,
}

impl From<&Fee> for FeeRow {
    fn from(f: &Fee) -> Self {
        Self {
            id: f.id.clone(),
            description: f.description.clone(),
            amount: format!("{:.2}", f.amount),
            due: f.due_date.clone(),
            status: f.status.to_string(),
            paid_on: f.paid_date.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct EventRow {
    #[tabled(rename = "DATE")]
    pub date: String,
    #[tabled(rename = "TITLE")]
    pub title: String,
    #[tabled(rename = "TYPE")]
    pub kind: String,
    #[tabled(rename = "LOCATION")]
    pub location: String,
    #[tabled(rename = "REGISTRATION")]
    pub registration: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            date: e.date.clone(),
            title: e.title.clone(),
            kind: e.event_type.clone(),
            location: e.location.clone(),
            registration: if e.registration_open { "open" } else { "closed" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct BeltLevelRow {
    #[tabled(rename = "RANK")]
    pub rank: u32,
    #[tabled(rename = "BELT")]
    pub name: String,
    #[tabled(rename = "COLOR")]
    pub color: String,
    #[tabled(rename = "MIN MONTHS")]
    pub min_months: u32,
}

impl From<&BeltLevel> for BeltLevelRow {
    fn from(b: &BeltLevel) -> Self {
        Self {
            rank: b.rank,
            name: b.name.clone(),
            color: b.color.clone(),
            min_months: b.min_months,
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct PromotionRow {
    #[tabled(rename = "DATE")]
    pub date: String,
    #[tabled(rename = "STUDENT")]
    pub student: String,
    #[tabled(rename = "FROM")]
    pub from: String,
    #[tabled(rename = "TO")]
    pub to: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Promotion> for PromotionRow {
    fn from(p: &Promotion) -> Self {
        Self {
            date: p.date.clone(),
            student: p.student_name.clone(),
            from: p.from_belt.clone(),
            to: p.to_belt.clone(),
            status: p.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
pub struct BeltTestRow {
    #[tabled(rename = "DATE")]
    pub date: String,
    #[tabled(rename = "TEST")]
    pub title: String,
    #[tabled(rename = "BELT")]
    pub belt: String,
    #[tabled(rename = "LOCATION")]
    pub location: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&BeltTest> for BeltTestRow {
    fn from(t: &BeltTest) -> Self {
        Self {
            date: t.date.clone(),
            title: t.title.clone(),
            belt: t.belt_level.clone(),
            location: t.location.clone(),
            status: t.status.clone(),
        }
    }
}
