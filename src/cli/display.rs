//! Display formatting for CLI output

use crate::models::Task;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(rename = "Task")]
    text: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl TaskRow {
    fn new(index: usize, task: &Task) -> Self {
        TaskRow {
            position: (index + 1).to_string(),
            text: truncate(&task.text, 60),
            status: task.status_label().to_string(),
        }
    }
}

/// Render the task list, or the placeholder when it is empty
pub fn render_task_list(title: &str, tasks: &[Task], placeholder: &str) -> String {
    if tasks.is_empty() {
        return format!("{}\n{}", title, placeholder);
    }

    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskRow::new(i, task))
        .collect();
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .to_string();

    format!("{}\n{}", title, table)
}

/// Greeting banner; logged-in users get the short form
pub fn greeting(name: &str, logged_in: bool) -> String {
    if logged_in {
        format!("Hello, {}!", name)
    } else {
        format!("Welcome back, {}!", name)
    }
}

/// Shell help text
pub fn help_text() -> &'static str {
    "Commands:
  add <text>      Add a task
  rm <n>          Remove task n
  toggle <n>      Mark task n done / not done
  list            Show the list
  help            Show this help
  quit            Leave the shell"
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}

/// Format for success messages
pub fn success(msg: &str) {
    println!("{}", msg);
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
