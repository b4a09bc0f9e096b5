//! Bundled sample records shown when the backend cannot be reached
//!
//! Dates are relative to the caller's today so the samples stay plausible
//! (recent attendance, upcoming events).

use chrono::Duration;

use crate::models::{
    AttendanceEntry, AttendanceStatus, BeltLevel, BeltTest, Certificate, DateContext, Event, Fee,
    FeeStatus, Promotion, Student, UserRecord,
};

fn day(dates: &DateContext, offset: i64) -> String {
    let today = dates.today();
    dates.render(
        today
            .checked_add_signed(Duration::days(offset))
            .unwrap_or(today),
    )
}

pub fn certificates(dates: &DateContext) -> Vec<Certificate> {
    vec![
        Certificate {
            id: "CERT-001".to_string(),
            title: "Yellow Belt Certificate".to_string(),
            student_name: "Demo Student".to_string(),
            belt_level: "Yellow Belt".to_string(),
            issue_date: day(dates, -120),
            status: "Active".to_string(),
            issued_by: "Academy".to_string(),
            certificate_number: Some("DOJO-2024-001".to_string()),
        },
        Certificate {
            id: "CERT-002".to_string(),
            title: "Orange Belt Certificate".to_string(),
            student_name: "Demo Student".to_string(),
            belt_level: "Orange Belt".to_string(),
            issue_date: day(dates, -30),
            status: "Active".to_string(),
            issued_by: "Academy".to_string(),
            certificate_number: Some("DOJO-2024-002".to_string()),
        },
    ]
}

pub fn students(dates: &DateContext) -> Vec<Student> {
    vec![
        Student {
            id: "STU-001".to_string(),
            name: "Demo Student".to_string(),
            email: "student@dojo.example".to_string(),
            belt_level: "Orange Belt".to_string(),
            status: "Active".to_string(),
            join_date: day(dates, -365),
            phone: None,
        },
        Student {
            id: "STU-002".to_string(),
            name: "Sample Trainee".to_string(),
            email: "trainee@dojo.example".to_string(),
            belt_level: "White Belt".to_string(),
            status: "Active".to_string(),
            join_date: day(dates, -45),
            phone: None,
        },
    ]
}

pub fn attendance(dates: &DateContext) -> Vec<AttendanceEntry> {
    [
        (1, AttendanceStatus::Present, "Kata Fundamentals"),
        (3, AttendanceStatus::Late, "Sparring"),
        (5, AttendanceStatus::Absent, "Kata Fundamentals"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (days_ago, status, class_name))| AttendanceEntry {
        id: format!("ATT-00{}", i + 1),
        student_id: "STU-001".to_string(),
        student_name: "Demo Student".to_string(),
        date: day(dates, -days_ago),
        status,
        class_name: class_name.to_string(),
    })
    .collect()
}

pub fn fees(dates: &DateContext) -> Vec<Fee> {
    vec![
        Fee {
            id: "FEE-001".to_string(),
            student_id: "STU-001".to_string(),
            description: "Monthly Fee".to_string(),
            amount: 1500.0,
            due_date: day(dates, -30),
            status: FeeStatus::Paid,
            paid_date: Some(day(dates, -32)),
        },
        Fee {
            id: "FEE-002".to_string(),
            student_id: "STU-001".to_string(),
            description: "Monthly Fee".to_string(),
            amount: 1500.0,
            due_date: day(dates, 5),
            status: FeeStatus::Pending,
            paid_date: None,
        },
    ]
}

pub fn events(dates: &DateContext) -> Vec<Event> {
    vec![
        Event {
            id: "EVT-001".to_string(),
            title: "Belt Grading Day".to_string(),
            description: "Quarterly grading for all junior ranks".to_string(),
            date: day(dates, 14),
            location: "Main Dojo".to_string(),
            event_type: "Grading".to_string(),
            registration_open: true,
        },
        Event {
            id: "EVT-002".to_string(),
            title: "Inter-Dojo Tournament".to_string(),
            description: "Open kumite and kata divisions".to_string(),
            date: day(dates, 40),
            location: "City Sports Hall".to_string(),
            event_type: "Tournament".to_string(),
            registration_open: false,
        },
    ]
}

pub fn belt_levels(_dates: &DateContext) -> Vec<BeltLevel> {
    [
        ("White Belt", "white", 0),
        ("Yellow Belt", "yellow", 3),
        ("Orange Belt", "orange", 4),
    ]
    .into_iter()
    .enumerate()
    .map(|(rank, (name, color, min_months))| BeltLevel {
        id: format!("BELT-{}", rank + 1),
        name: name.to_string(),
        color: color.to_string(),
        rank: rank as u32,
        min_months,
        requirements: Vec::new(),
    })
    .collect()
}

pub fn promotions(dates: &DateContext) -> Vec<Promotion> {
    vec![Promotion {
        id: "PROMO-001".to_string(),
        student_name: "Demo Student".to_string(),
        from_belt: "Yellow Belt".to_string(),
        to_belt: "Orange Belt".to_string(),
        date: day(dates, -30),
        status: "Completed".to_string(),
    }]
}

pub fn belt_tests(dates: &DateContext) -> Vec<BeltTest> {
    vec![BeltTest {
        id: "TEST-001".to_string(),
        title: "Green Belt Test".to_string(),
        belt_level: "Green Belt".to_string(),
        date: day(dates, 21),
        location: "Main Dojo".to_string(),
        status: "Scheduled".to_string(),
    }]
}

/// Profile shown when neither the backend nor the session has one
pub fn profile() -> UserRecord {
    UserRecord {
        id: "guest".to_string(),
        email: "guest@dojo.example".to_string(),
        name: "Guest".to_string(),
        role: Some("student".to_string()),
        ..UserRecord::default()
    }
}
