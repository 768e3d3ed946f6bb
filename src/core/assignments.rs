use crate::models::FieldStatus;
use std::collections::{BTreeSet, HashMap};

/// In-memory master assignment list: coach name → permitted fields.
///
/// Loaded once per process; names and fields are compared verbatim.
#[derive(Debug, Default, Clone)]
pub struct MasterAssignments {
    by_coach: HashMap<String, BTreeSet<String>>,
}

impl MasterAssignments {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut by_coach: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (coach, field) in rows {
            by_coach.entry(coach).or_default().insert(field);
        }
        Self { by_coach }
    }

    /// Fields listed against `name`; empty for coaches not on the list.
    pub fn assigned_fields(&self, name: &str) -> BTreeSet<&str> {
        self.by_coach
            .get(name)
            .map(|fields| fields.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn status_for(&self, name: &str, field: &str) -> FieldStatus {
        FieldStatus::from_match(
            self.by_coach
                .get(name)
                .is_some_and(|fields| fields.contains(field)),
        )
    }

    pub fn coach_count(&self) -> usize {
        self.by_coach.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_coach.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MasterAssignments {
        MasterAssignments::from_rows([
            ("Alice".to_string(), "North".to_string()),
            ("Alice".to_string(), "East".to_string()),
            ("Bob".to_string(), "South".to_string()),
            ("Bob".to_string(), "South".to_string()),
        ])
    }

    #[test]
    fn multiple_rows_per_coach_are_merged() {
        let m = sample();
        assert_eq!(m.coach_count(), 2);
        assert_eq!(
            m.assigned_fields("Alice").into_iter().collect::<Vec<_>>(),
            vec!["East", "North"]
        );
        assert_eq!(m.assigned_fields("Bob").len(), 1);
    }

    #[test]
    fn unknown_coach_has_no_fields() {
        let m = sample();
        assert!(m.assigned_fields("Zed").is_empty());
        assert_eq!(m.status_for("Zed", "North"), FieldStatus::Incorrect);
    }

    #[test]
    fn status_is_exact_match() {
        let m = sample();
        assert_eq!(m.status_for("Alice", "East"), FieldStatus::Correct);
        assert_eq!(m.status_for("Alice", "north"), FieldStatus::Incorrect);
        assert_eq!(m.status_for("alice", "North"), FieldStatus::Incorrect);
    }

    #[test]
    fn empty_list_rejects_everyone() {
        let m = MasterAssignments::default();
        assert!(m.is_empty());
        assert_eq!(m.status_for("Alice", "North"), FieldStatus::Incorrect);
    }
}
