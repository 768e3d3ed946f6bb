use serde::Serialize;

/// Lifecycle marker of a shift row.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Action {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clocked In/Out")]
    ClockedInOut,
}

impl Action {
    /// Convert enum → ledger string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ClockIn => "Clock In",
            Action::ClockedInOut => "Clocked In/Out",
        }
    }

    /// Convert ledger string → enum
    pub fn from_ledger_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Clock In" => Some(Action::ClockIn),
            "Clocked In/Out" => Some(Action::ClockedInOut),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Action::ClockIn)
    }
}
