//! Domain types for the task collection.
//!
//! # Design
//! `TaskRecord` mirrors the server's schema but is defined independently of
//! the mock-server crate; integration tests catch schema drift. The draft
//! exists in two forms: `Draft` is the freely editable form state held by the
//! store (both fields may be empty while the user types), and `NewTaskInput`
//! is the validated payload minted at submit time — its constructor rejects
//! an empty title, so a create request can never carry one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task as stored server-side. The id is assigned by the server and
/// never changes; the client treats records as read-only snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl TaskRecord {
    /// A copy of this record with `completed` inverted and every other field
    /// unchanged. Used as the whole-record PUT payload for a toggle.
    pub fn toggled(&self) -> TaskRecord {
        TaskRecord {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Freely editable form state. Lives in the store, reset after a create
/// confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

/// Request payload for creating a new task. Construction guarantees a
/// non-empty title.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewTaskInput {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl NewTaskInput {
    /// Returns `None` when the title is empty or whitespace-only.
    pub fn new(title: &str, description: Option<&str>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            description: description.map(str::to_string),
        })
    }

    /// Validate a form draft into a create payload. An empty description
    /// field is treated as "no description".
    pub fn from_draft(draft: &Draft) -> Option<Self> {
        let description = match draft.description.trim() {
            "" => None,
            d => Some(d),
        };
        Self::new(&draft.title, description)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_record_roundtrips_through_json() {
        let record = TaskRecord {
            id: Uuid::new_v4(),
            title: "Roundtrip".to_string(),
            description: Some("details".to_string()),
            completed: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TaskRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn task_record_description_defaults_to_none() {
        let record: TaskRecord = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Bare","completed":false}"#,
        )
        .unwrap();
        assert!(record.description.is_none());
    }

    #[test]
    fn task_record_omits_absent_description() {
        let record = TaskRecord {
            id: Uuid::nil(),
            title: "Bare".to_string(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn toggled_flips_only_completed() {
        let record = TaskRecord {
            id: Uuid::new_v4(),
            title: "Walk dog".to_string(),
            description: Some("before breakfast".to_string()),
            completed: false,
        };
        let toggled = record.toggled();
        assert!(toggled.completed);
        assert_eq!(toggled.id, record.id);
        assert_eq!(toggled.title, record.title);
        assert_eq!(toggled.description, record.description);
    }

    #[test]
    fn new_task_input_rejects_empty_title() {
        assert!(NewTaskInput::new("", None).is_none());
        assert!(NewTaskInput::new("   ", None).is_none());
    }

    #[test]
    fn new_task_input_trims_title() {
        let input = NewTaskInput::new("  Buy milk  ", None).unwrap();
        assert_eq!(input.title(), "Buy milk");
        assert!(input.description().is_none());
    }

    #[test]
    fn new_task_input_serializes_without_absent_description() {
        let input = NewTaskInput::new("Buy milk", None).unwrap();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn from_draft_requires_title() {
        let draft = Draft {
            title: String::new(),
            description: "details".to_string(),
        };
        assert!(NewTaskInput::from_draft(&draft).is_none());
    }

    #[test]
    fn from_draft_drops_blank_description() {
        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "  ".to_string(),
        };
        let input = NewTaskInput::from_draft(&draft).unwrap();
        assert!(input.description().is_none());
    }

    #[test]
    fn from_draft_keeps_description() {
        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "two liters".to_string(),
        };
        let input = NewTaskInput::from_draft(&draft).unwrap();
        assert_eq!(input.description(), Some("two liters"));
    }
}
