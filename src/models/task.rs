//! Task model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the task list.
///
/// A task has no identity beyond its position in the list. The `completed`
/// flag is a display hint only; it never affects ordering or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task from already-normalized text
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }

    /// Normalize raw user input into a task.
    ///
    /// Returns `None` when the trimmed input is empty.
    pub fn from_input(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            None
        } else {
            Some(Task::new(text))
        }
    }

    /// Flip the completed display flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Status label used by renderers
    pub fn status_label(&self) -> &'static str {
        if self.completed { "done" } else { "open" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_from_input_trims() {
        let task = Task::from_input("  Walk dog \n").unwrap();
        assert_eq!(task.text, "Walk dog");
    }

    #[test]
    fn test_from_input_rejects_blank() {
        assert!(Task::from_input("").is_none());
        assert!(Task::from_input("   ").is_none());
        assert!(Task::from_input("\t\n").is_none());
    }

    #[test]
    fn test_toggle() {
        let mut task = Task::new("Test");
        task.toggle();
        assert!(task.completed);
        assert_eq!(task.status_label(), "done");

        task.toggle();
        assert!(!task.completed);
        assert_eq!(task.status_label(), "open");
    }

    #[test]
    fn test_display() {
        assert_eq!(Task::new("Buy milk").to_string(), "Buy milk");
    }

    #[test]
    fn test_deserialize_without_completed() {
        let task: Task = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
        assert_eq!(task, Task::new("Buy milk"));
    }
}
