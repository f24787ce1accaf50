//! Wire types for the JSON-lines event protocol

use crate::models::Task;
use crate::session::Session;
use crate::store::{ChangeKind, TaskListChange};
use serde::{Deserialize, Serialize};

/// Intent sent by a rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Submit new task carrying raw text
    Submit { text: String },
    /// Replace the pending-input field
    Input { text: String },
    /// Submit whatever is in the pending-input field
    SubmitInput,
    Remove { index: usize },
    Toggle { index: usize },
    /// Second interaction on a task; removes it
    Dismiss { index: usize },
    Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Added,
    Removed,
    Toggled,
}

/// Event sent back to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputEvent {
    /// Task list changed; carries the full ordered sequence
    Changed {
        change: ChangeAction,
        index: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        removed: Option<Task>,
        tasks: Vec<Task>,
        is_empty: bool,
    },
    /// Current state, sent on request and on startup
    Snapshot {
        tasks: Vec<Task>,
        is_empty: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        input: String,
    },
    /// Malformed protocol line
    Error { message: String },
}

impl OutputEvent {
    pub fn changed(change: &TaskListChange<'_>) -> Self {
        let (action, index, removed) = match change.kind {
            ChangeKind::Added { index } => (ChangeAction::Added, *index, None),
            ChangeKind::Removed { index, task } => {
                (ChangeAction::Removed, *index, Some(task.clone()))
            }
            ChangeKind::Toggled { index } => (ChangeAction::Toggled, *index, None),
        };

        OutputEvent::Changed {
            change: action,
            index,
            removed,
            tasks: change.tasks.to_vec(),
            is_empty: change.tasks.is_empty(),
        }
    }

    pub fn snapshot(session: &Session) -> Self {
        let store = session.store();
        OutputEvent::Snapshot {
            tasks: store.tasks().to_vec(),
            is_empty: store.is_empty(),
            placeholder: session.placeholder().map(String::from),
            input: session.input().to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        OutputEvent::Error {
            message: message.into(),
        }
    }
}
