//! tasklist - in-memory task list with change notification
//!
//! This library provides an ordered task list that broadcasts every change
//! to subscribed observers, plus two rendering layers that drive it: an
//! interactive terminal shell and a JSON-lines event protocol.

pub mod cli;
pub mod config;
pub mod models;
pub mod protocol;
pub mod session;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::Task;
pub use session::{Session, SessionOptions};
pub use store::{Change, ChangeKind, TaskListChange, TaskListObserver, TaskListStore};
