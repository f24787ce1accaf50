//! In-memory task list state

pub mod task_list;

pub use task_list::{
    Change, ChangeKind, SubscriptionId, TaskListChange, TaskListObserver, TaskListStore,
};
