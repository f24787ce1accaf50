//! Ordered in-memory task list with change notification

use crate::models::Task;
use std::fmt;

/// Result of a mutating call on the store.
///
/// Invalid input never raises an error; it degrades to `NoOp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    NoOp,
}

impl Change {
    pub fn is_applied(self) -> bool {
        self == Change::Applied
    }
}

/// What happened to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added { index: usize },
    Removed { index: usize, task: Task },
    Toggled { index: usize },
}

/// Notification delivered to observers after every applied mutation
#[derive(Debug, Clone, Copy)]
pub struct TaskListChange<'a> {
    pub kind: &'a ChangeKind,
    /// The full ordered sequence after the mutation
    pub tasks: &'a [Task],
}

impl TaskListChange<'_> {
    /// Text of every task, in display order
    pub fn texts(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Receives the resulting sequence after each applied mutation
pub trait TaskListObserver {
    fn on_change(&mut self, change: &TaskListChange<'_>);
}

impl<F> TaskListObserver for F
where
    F: FnMut(&TaskListChange<'_>),
{
    fn on_change(&mut self, change: &TaskListChange<'_>) {
        self(change)
    }
}

/// Handle returned by [`TaskListStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the ordered task collection and enforces its invariants:
///
/// - no task is inserted with empty or whitespace-only text
/// - removal is stable: later tasks shift down by one
/// - duplicates are distinct entries and there is no size limit
pub struct TaskListStore {
    tasks: Vec<Task>,
    observers: Vec<(SubscriptionId, Box<dyn TaskListObserver>)>,
    next_subscription: u64,
}

impl TaskListStore {
    /// Create an empty store
    pub fn new() -> Self {
        TaskListStore {
            tasks: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Append the trimmed `text` to the end of the list.
    ///
    /// Blank input is a no-op and observers are not notified.
    pub fn add(&mut self, text: &str) -> Change {
        let Some(task) = Task::from_input(text) else {
            log::debug!("Ignoring blank task input");
            return Change::NoOp;
        };

        log::debug!("Adding task #{}: {}", self.tasks.len(), task.text);
        self.tasks.push(task);
        self.notify(ChangeKind::Added {
            index: self.tasks.len() - 1,
        });
        Change::Applied
    }

    /// Remove the task at `index`, preserving the order of the rest.
    ///
    /// An index outside `[0, len)` is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Change {
        if index >= self.tasks.len() {
            log::debug!(
                "Ignoring removal at {} (list has {} tasks)",
                index,
                self.tasks.len()
            );
            return Change::NoOp;
        }

        let task = self.tasks.remove(index);
        log::debug!("Removed task #{}: {}", index, task.text);
        self.notify(ChangeKind::Removed { index, task });
        Change::Applied
    }

    /// Flip the completed flag of the task at `index`
    pub fn toggle_completed(&mut self, index: usize) -> Change {
        let Some(task) = self.tasks.get_mut(index) else {
            return Change::NoOp;
        };

        task.toggle();
        self.notify(ChangeKind::Toggled { index });
        Change::Applied
    }

    /// True only when the list holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// All tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Text of every task, in display order
    pub fn texts(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.text.as_str()).collect()
    }

    /// Register an observer; it is called after every applied mutation,
    /// in subscription order.
    pub fn subscribe(&mut self, observer: impl TaskListObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of subscribed observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, kind: ChangeKind) {
        let change = TaskListChange {
            kind: &kind,
            tasks: &self.tasks,
        };
        for (_, observer) in &mut self.observers {
            observer.on_change(&change);
        }
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskListStore")
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .finish()
    }
}
