//! Presentation adapter: store state in, render tree out, intents routed.
//!
//! # Design
//! `render` is a pure function from store state to a typed render tree — the
//! rendering layer (whatever draws it) consumes `Page` and never touches the
//! store directly. `dispatch` is the other half of the boundary: each
//! discrete user action maps to exactly one controller call. Mutating
//! controls carry `enabled` flags that go false while an operation is in
//! flight.

use uuid::Uuid;

use crate::controller::SyncController;
use crate::error::SyncError;
use crate::http::Transport;
use crate::store::Store;

/// Render tree for the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub form: TaskForm,
    pub error_banner: Option<&'static str>,
    pub loading: bool,
    pub cards: Vec<TaskCard>,
    pub empty_state: bool,
}

/// The new-task form, mirroring the store draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub submit_enabled: bool,
}

/// One task card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub toggle_enabled: bool,
    pub delete_enabled: bool,
}

/// A discrete user action at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the new-task form (current store draft).
    SubmitNewTask,
    /// Click delete on a card.
    ClickDelete(Uuid),
    /// Toggle a card's checkbox.
    ToggleCompleted(Uuid),
}

/// Map store state to the render tree.
pub fn render(store: &Store) -> Page {
    let loading = store.status().is_loading();
    let cards: Vec<TaskCard> = store
        .tasks()
        .iter()
        .map(|task| TaskCard {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            completed: task.completed,
            toggle_enabled: !loading,
            delete_enabled: !loading,
        })
        .collect();

    Page {
        form: TaskForm {
            title: store.draft().title.clone(),
            description: store.draft().description.clone(),
            submit_enabled: !loading,
        },
        error_banner: store.status().error_message(),
        loading,
        empty_state: cards.is_empty() && !loading,
        cards,
    }
}

/// Route one intent to exactly one controller operation.
///
/// A submit whose draft title is empty issues no request (the form marks the
/// title required), and a toggle for an id no longer in the collection is
/// dropped.
pub async fn dispatch<T: Transport>(
    controller: &SyncController<T>,
    intent: Intent,
) -> Result<(), SyncError> {
    match intent {
        Intent::SubmitNewTask => {
            let input = crate::types::NewTaskInput::from_draft(controller.store().draft());
            match input {
                Some(input) => controller.create(&input).await,
                None => Ok(()),
            }
        }
        Intent::ClickDelete(id) => controller.remove(id).await,
        Intent::ToggleCompleted(id) => {
            let record = controller.store().tasks().iter().find(|t| t.id == id).cloned();
            match record {
                Some(record) => controller.toggle_complete(&record).await,
                None => Ok(()),
            }
        }
    }
}
