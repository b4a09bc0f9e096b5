//! Authentication and user models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Login form submission
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

/// Signed-in user as described by the backend.
///
/// Only a few fields are known to the client; everything else the server
/// sends is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID (numbers are converted to strings)
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub name: String,

    /// Role within the academy (student, instructor, admin)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Token some backends embed in the user payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Server-defined fields the client does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Display name, falling back to the email address
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_numeric_id_and_extra_fields() {
        let user: UserRecord = serde_json::from_value(json!({
            "id": 7,
            "email": "sensei@dojo.test",
            "name": "Sensei",
            "beltLevel": "Black Belt"
        }))
        .unwrap();

        assert_eq!(user.id, "7");
        assert_eq!(user.role, None);
        assert_eq!(user.extra.get("beltLevel"), Some(&json!("Black Belt")));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["beltLevel"], "Black Belt");
    }

    #[test]
    fn test_user_missing_fields_default() {
        let user: UserRecord = serde_json::from_value(json!({})).unwrap();
        assert!(user.id.is_empty());
        assert!(user.token.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserRecord {
            email: "a@b.com".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "a@b.com");
    }

    #[test]
    fn test_credentials_trim_email() {
        let creds = Credentials::new("  a@b.com ", "x");
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({ "email": "a@b.com", "password": "x" })
        );
    }
}
