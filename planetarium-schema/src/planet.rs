use serde::{Deserialize, Serialize};

/// Wire-level planet record.
///
/// The same shape is used for create payloads (where `id` is absent or null)
/// and for responses (where `id` carries the database-assigned identifier).
/// Missing body fields deserialize to empty strings so that null, missing and
/// blank all fail the same non-blank validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Planet {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub terrain: String,
}

/// A single failed field check, reported back to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl Planet {
    /// Filter template for query-by-example listing. Only `climate` and
    /// `terrain` participate; absent parameters stay blank and act as
    /// wildcards downstream.
    pub fn template(climate: Option<String>, terrain: Option<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            climate: climate.unwrap_or_default(),
            terrain: terrain.unwrap_or_default(),
        }
    }

    /// Checks the non-blank field invariants before any persistence attempt.
    ///
    /// All violations are collected so the caller can report them together
    /// rather than one at a time.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();
        for (field, value) in [
            ("name", &self.name),
            ("climate", &self.climate),
            ("terrain", &self.terrain),
        ] {
            if value.trim().is_empty() {
                violations.push(FieldViolation {
                    field,
                    message: "must not be blank".to_string(),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
