//! Substitute ("joker") personnel models.
//!
//! Standby employees cover shifts when a regularly-scheduled employee is on
//! leave. They may be registered on first use through the substitute store;
//! registration is an idempotent upsert keyed by the national identity
//! number, never a duplicate insert.

use serde::{Deserialize, Serialize};

/// The identity fields used to register (or re-find) a standby employee.
///
/// The `national_id` is the upsert key: registering the same identity twice
/// must yield the same stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteIdentity {
    /// National identity number (the unique upsert key).
    pub national_id: String,
    /// Full name of the standby person.
    pub name: String,
    /// Employing company, when the standby comes from a contractor.
    #[serde(default)]
    pub company: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// A standby employee available to cover leave gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteEmployee {
    /// Unique identifier of the substitute record.
    pub id: String,
    /// Full name of the standby person.
    pub name: String,
    /// National identity number.
    pub national_id: String,
    /// Employing company, when applicable.
    #[serde(default)]
    pub company: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Whether the substitute is currently available for assignment.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_deserialization_defaults() {
        let json = r#"{
            "national_id": "12345678901",
            "name": "C. Kaya"
        }"#;

        let identity: SubstituteIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.national_id, "12345678901");
        assert!(identity.company.is_none());
        assert!(identity.phone.is_none());
    }

    #[test]
    fn test_substitute_round_trip() {
        let substitute = SubstituteEmployee {
            id: "sub_001".to_string(),
            name: "C. Kaya".to_string(),
            national_id: "12345678901".to_string(),
            company: Some("Acme Security".to_string()),
            phone: Some("+90 555 000 0000".to_string()),
            active: true,
        };

        let json = serde_json::to_string(&substitute).unwrap();
        let deserialized: SubstituteEmployee = serde_json::from_str(&json).unwrap();
        assert_eq!(substitute, deserialized);
    }

    #[test]
    fn test_inactive_substitute() {
        let json = r#"{
            "id": "sub_002",
            "name": "D. Celik",
            "national_id": "98765432109",
            "active": false
        }"#;

        let substitute: SubstituteEmployee = serde_json::from_str(json).unwrap();
        assert!(!substitute.active);
        assert!(substitute.company.is_none());
    }
}
