use serde::Serialize;

use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    /// 1-based position, as used by script commands
    pub position: usize,
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CountJson {
    pub count: usize,
}

pub fn task_list_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        count: tasks.len(),
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(i, t)| TaskJson {
                position: i + 1,
                id: t.id,
                title: t.title.clone(),
                done: t.done,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// "N task(s)"
pub fn format_count(count: usize) -> String {
    format!("{} task{}", count, if count == 1 { "" } else { "s" })
}

/// `[x] Title`
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] {}", task.checkbox_char(), task.title)
}

/// Count header followed by one line per task
pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = format_count(tasks.len());
    for task in tasks {
        out.push('\n');
        out.push_str(&format_task_line(task));
    }
    out
}

/// Render the list in the requested format
pub fn render_list(tasks: &[Task], json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(&task_list_json(tasks))
    } else {
        Ok(format_task_list(tasks))
    }
}

/// Render the count in the requested format
pub fn render_count(count: usize, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(&CountJson { count })
    } else {
        Ok(format_count(count))
    }
}
