use serde::Serialize;

/// Outcome of checking a claimed field against the master assignment list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum FieldStatus {
    #[serde(rename = "Correct Field")]
    Correct,
    #[serde(rename = "Incorrect Field")]
    Incorrect,
}

impl FieldStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Correct => "Correct Field",
            FieldStatus::Incorrect => "Incorrect Field",
        }
    }

    pub fn from_ledger_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Correct Field" => Some(FieldStatus::Correct),
            "Incorrect Field" => Some(FieldStatus::Incorrect),
            _ => None,
        }
    }

    pub fn from_match(is_assigned: bool) -> Self {
        if is_assigned {
            FieldStatus::Correct
        } else {
            FieldStatus::Incorrect
        }
    }
}
