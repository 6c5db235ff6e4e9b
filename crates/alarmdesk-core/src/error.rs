// ── Core error types ──
//
// Store mutations never fail; they report "ignored" instead. These errors
// come from lookups that a caller wants to be strict about and from parsing
// command scripts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Command script errors ────────────────────────────────────────
    #[error("Invalid command script: {message}")]
    Script { message: String },
}

impl CoreError {
    pub fn alarm_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Alarm".into(),
            identifier: id.to_string(),
        }
    }

    pub fn cso_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Operator".into(),
            identifier: id.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Script {
            message: err.to_string(),
        }
    }
}
