//! Belt ranking models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::raw::{self, DateContext};

/// A rank in the belt system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeltLevel {
    pub id: String,
    /// Belt name (default `"Belt"`)
    pub name: String,
    /// Display color (default `"white"`)
    pub color: String,
    /// Position in the ranking, lowest first (default 0)
    pub rank: u32,
    /// Minimum months of training at the previous rank (default 0)
    pub min_months: u32,
    /// Techniques required for grading
    pub requirements: Vec<String>,
}

impl BeltLevel {
    pub fn from_backend(raw: &Value, _dates: &DateContext) -> Self {
        Self {
            id: raw::text_or(raw, &["id", "_id", "levelId"], "unknown"),
            name: raw::text_or(raw, &["name", "title"], "Belt"),
            color: raw::text_or(raw, &["color", "colour"], "white"),
            rank: whole(raw, &["rank", "order", "level"]),
            min_months: whole(raw, &["minMonths", "minimumMonths", "duration"]),
            requirements: raw::string_list(raw, &["requirements", "techniques"]),
        }
    }
}

/// A student's move from one belt to the next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    /// Student name (default `"Student"`)
    pub student_name: String,
    /// Previous belt (default `"N/A"`)
    pub from_belt: String,
    /// New belt (default `"N/A"`)
    pub to_belt: String,
    /// Promotion date in the configured format (default: today)
    pub date: String,
    /// Promotion state (default `"Completed"`)
    pub status: String,
}

impl Promotion {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        Self {
            id: raw::text_or(raw, &["id", "_id", "promotionId"], "unknown"),
            student_name: raw::text_or(raw, &["studentName", "student.name"], "Student"),
            from_belt: raw::text_or(raw, &["fromBelt", "previousBelt", "fromBelt.name"], "N/A"),
            to_belt: raw::text_or(raw, &["toBelt", "newBelt", "toBelt.name"], "N/A"),
            date: dates.date_field(raw, &["date", "promotionDate", "promotedAt"]),
            status: raw::text_or(raw, &["status"], "Completed"),
        }
    }
}

/// A scheduled grading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeltTest {
    pub id: String,
    /// Test title (default `"Belt Test"`)
    pub title: String,
    /// Belt being tested for (default `"N/A"`)
    pub belt_level: String,
    /// Test date in the configured format (default: today)
    pub date: String,
    /// Venue (default `"Main Dojo"`)
    pub location: String,
    /// Test state (default `"Scheduled"`)
    pub status: String,
}

impl BeltTest {
    pub fn from_backend(raw: &Value, dates: &DateContext) -> Self {
        Self {
            id: raw::text_or(raw, &["id", "_id", "testId"], "unknown"),
            title: raw::text_or(raw, &["title", "name"], "Belt Test"),
            belt_level: raw::text_or(raw, &["beltLevel", "belt", "belt.name"], "N/A"),
            date: dates.date_field(raw, &["date", "testDate", "scheduledAt"]),
            location: raw::text_or(raw, &["location", "venue"], "Main Dojo"),
            status: raw::text_or(raw, &["status"], "Scheduled"),
        }
    }
}

fn whole(raw: &Value, keys: &[&str]) -> u32 {
    raw::number(raw, keys)
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn dates() -> DateContext {
        DateContext::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), "%Y-%m-%d")
    }

    #[test]
    fn test_belt_level() {
        let level = BeltLevel::from_backend(
            &json!({ "name": "Orange Belt", "rank": "3", "requirements": ["Kata 2", "Kumite"] }),
            &dates(),
        );
        assert_eq!(level.rank, 3);
        assert_eq!(level.color, "white");
        assert_eq!(level.requirements.len(), 2);
    }

    #[test]
    fn test_belt_level_negative_rank() {
        let level = BeltLevel::from_backend(&json!({ "rank": -2 }), &dates());
        assert_eq!(level.rank, 0);
        assert_eq!(level.name, "Belt");
    }

    #[test]
    fn test_promotion_nested_belts() {
        let promotion = Promotion::from_backend(
            &json!({
                "student": { "name": "Hana" },
                "fromBelt": { "name": "Yellow Belt" },
                "toBelt": "Orange Belt"
            }),
            &dates(),
        );
        assert_eq!(promotion.student_name, "Hana");
        assert_eq!(promotion.from_belt, "Yellow Belt");
        assert_eq!(promotion.to_belt, "Orange Belt");
        assert_eq!(promotion.status, "Completed");
    }

    #[test]
    fn test_belt_test_defaults() {
        let test = BeltTest::from_backend(&json!({}), &dates());
        assert_eq!(test.title, "Belt Test");
        assert_eq!(test.status, "Scheduled");
        assert_eq!(test.date, "2024-06-01");
    }
}
