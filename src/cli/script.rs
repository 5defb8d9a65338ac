use std::io::Write;

use log::{debug, info};

use crate::cli::output::{render_count, render_list};
use crate::model::task::{Task, TaskId};
use crate::ops::task_ops::{self, Decision, Intent, Notice, RemovalRequest, TaskList};
use crate::ops::task_row::TaskRow;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} needs {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },
    #[error("line {line}: {value:?} is not a task position (positions start at 1)")]
    BadPosition { line: usize, value: String },
    #[error("line {line}: expected yes or no, got {value:?}")]
    BadAnswer { line: usize, value: String },
    #[error("line {line}: no task at position {position} (list has {count})")]
    NoSuchTask {
        line: usize,
        position: usize,
        count: usize,
    },
    #[error("line {line}: no task is being edited")]
    NotEditing { line: usize },
    #[error("line {line}: already editing task {position}; commit or cancel first")]
    AlreadyEditing { line: usize, position: usize },
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One parsed script line. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(usize),
    Rename(usize, String),
    /// Controller removal with the answer to the confirmation prompt
    Remove(usize, bool),
    /// Row delete request, refused while that row is being edited
    Delete(usize, bool),
    Edit(usize),
    Type(String),
    Backspace(usize),
    Commit,
    Cancel,
    List,
    Count,
}

/// Parse a whole script up front so that syntax errors are reported before
/// anything runs. Returns `(line number, command)` pairs.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        commands.push((line, parse_line(line, raw.trim_start())?));
    }
    Ok(commands)
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (word, rest) = split_word(text);
    let cmd = match word {
        "add" => Command::Add(title_arg(line, "add", rest)?),
        "toggle" => Command::Toggle(position_arg(line, "toggle", rest.trim())?),
        "rename" => {
            let (pos, title) = split_word(rest);
            Command::Rename(
                position_arg(line, "rename", pos)?,
                title_arg(line, "rename", title)?,
            )
        }
        "remove" | "delete" => {
            let name = if word == "remove" { "remove" } else { "delete" };
            let (pos, answer) = split_word(rest);
            let position = position_arg(line, name, pos)?;
            let confirm = answer_arg(line, name, answer.trim())?;
            if name == "remove" {
                Command::Remove(position, confirm)
            } else {
                Command::Delete(position, confirm)
            }
        }
        "edit" => Command::Edit(position_arg(line, "edit", rest.trim())?),
        // Everything after the single separating space, verbatim
        "type" => {
            let after = text[word.len()..].strip_prefix(' ').unwrap_or("");
            if after.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "type",
                    expected: "text",
                });
            }
            Command::Type(after.to_string())
        }
        "backspace" => {
            let rest = rest.trim();
            if rest.is_empty() {
                Command::Backspace(1)
            } else {
                Command::Backspace(rest.parse().map_err(|_| ScriptError::BadPosition {
                    line,
                    value: rest.to_string(),
                })?)
            }
        }
        "commit" => Command::Commit,
        "cancel" => Command::Cancel,
        "list" => Command::List,
        "count" => Command::Count,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(cmd)
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], text[i..].trim_start()),
        None => (text, ""),
    }
}

fn title_arg(line: usize, command: &'static str, rest: &str) -> Result<String, ScriptError> {
    let title = rest.trim();
    if title.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a title",
        });
    }
    Ok(title.to_string())
}

fn position_arg(line: usize, command: &'static str, value: &str) -> Result<usize, ScriptError> {
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a task position",
        });
    }
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ScriptError::BadPosition {
            line,
            value: value.to_string(),
        }),
    }
}

fn answer_arg(line: usize, command: &'static str, value: &str) -> Result<bool, ScriptError> {
    match value {
        "" => Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "yes or no",
        }),
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        other => Err(ScriptError::BadAnswer {
            line,
            value: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Drives a `TaskList` from parsed script commands, the same way the TUI
/// does: rows emit intents, the controller applies them, removals wait on
/// an answer.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    tasks: TaskList,
    editing: Option<TaskRow>,
    notices: Vec<Notice>,
    warnings: Vec<String>,
    json: bool,
}

impl ScriptRunner {
    pub fn new(tasks: TaskList, json: bool) -> Self {
        ScriptRunner {
            tasks,
            json,
            ..Default::default()
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Notices and refusals collected so far, prefixed with their line
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Row currently in edit mode, if any
    pub fn editing(&self) -> Option<&TaskRow> {
        self.editing.as_ref()
    }

    /// Run every command in order, writing `list`/`count` output to `out`.
    /// Stops at the first error.
    pub fn run(
        &mut self,
        commands: &[(usize, Command)],
        out: &mut dyn Write,
    ) -> Result<(), ScriptError> {
        for (line, cmd) in commands {
            debug!("line {}: {:?}", line, cmd);
            self.step(*line, cmd, out)?;
        }
        Ok(())
    }

    fn step(&mut self, line: usize, cmd: &Command, out: &mut dyn Write) -> Result<(), ScriptError> {
        match cmd {
            Command::Add(title) => {
                self.tasks.add_task(title.clone(), &mut self.notices);
                self.drain_notices(line);
            }
            Command::Toggle(pos) => {
                let id = self.resolve(line, *pos)?;
                let intent = match &self.editing {
                    Some(row) if row.task_id() == id => row.toggle(),
                    _ => Intent::Toggle(id),
                };
                self.apply(intent, None);
            }
            Command::Rename(pos, title) => {
                let id = self.resolve(line, *pos)?;
                self.tasks.rename_task(id, title.clone());
            }
            Command::Remove(pos, confirm) => {
                let id = self.resolve(line, *pos)?;
                self.apply(Intent::Remove(id), Some(*confirm));
            }
            Command::Delete(pos, confirm) => {
                let id = self.resolve(line, *pos)?;
                let intent = match &self.editing {
                    Some(row) if row.task_id() == id => row.request_delete(),
                    _ => self.tasks.get(id).and_then(|t| TaskRow::new(t).request_delete()),
                };
                match intent {
                    Some(intent) => self.apply(intent, Some(*confirm)),
                    None => self.warn(line, format!("task {} is being edited; not removed", pos)),
                }
            }
            Command::Edit(pos) => {
                let id = self.resolve(line, *pos)?;
                if let Some(row) = &self.editing {
                    let position = self.tasks.position(row.task_id()).map_or(0, |i| i + 1);
                    return Err(ScriptError::AlreadyEditing { line, position });
                }
                if let Some(task) = self.tasks.get(id) {
                    let mut row = TaskRow::new(task);
                    row.start_edit(task);
                    self.editing = Some(row);
                }
            }
            Command::Type(text) => {
                if let Some(buf) = self.editing_mut(line)?.buffer_mut() {
                    buf.insert_str(text);
                }
            }
            Command::Backspace(n) => {
                if let Some(buf) = self.editing_mut(line)?.buffer_mut() {
                    for _ in 0..*n {
                        buf.backspace();
                    }
                }
            }
            Command::Commit => {
                self.editing_mut(line)?;
                if let Some(intent) = self.editing.take().and_then(|mut row| row.commit_edit()) {
                    self.apply(intent, None);
                }
            }
            Command::Cancel => {
                self.editing_mut(line)?;
                if let Some(mut row) = self.editing.take() {
                    if let Some(task) = self.tasks.get(row.task_id()) {
                        row.cancel_edit(task);
                    }
                }
            }
            Command::List => {
                writeln!(out, "{}", render_list(self.tasks.tasks(), self.json)?)?;
            }
            Command::Count => {
                writeln!(out, "{}", render_count(self.tasks.task_count(), self.json)?)?;
            }
        }
        self.drop_stale_edit();
        Ok(())
    }

    /// Route an intent into the controller; a removal is answered at once.
    fn apply(&mut self, intent: Intent, answer: Option<bool>) {
        let mut pending: Option<RemovalRequest> = None;
        task_ops::apply_intent(&mut self.tasks, intent, &mut pending);
        if let Some(request) = pending {
            let decision = Decision::from(answer.unwrap_or(false));
            self.tasks.resolve_removal(request, decision);
        }
    }

    fn resolve(&self, line: usize, position: usize) -> Result<TaskId, ScriptError> {
        position
            .checked_sub(1)
            .and_then(|i| self.tasks.tasks().get(i))
            .map(|t: &Task| t.id)
            .ok_or(ScriptError::NoSuchTask {
                line,
                position,
                count: self.tasks.task_count(),
            })
    }

    fn editing_mut(&mut self, line: usize) -> Result<&mut TaskRow, ScriptError> {
        self.editing
            .as_mut()
            .ok_or(ScriptError::NotEditing { line })
    }

    // A removed task takes its open edit with it
    fn drop_stale_edit(&mut self) {
        let stale = match &self.editing {
            Some(row) => self.tasks.get(row.task_id()).is_none(),
            None => false,
        };
        if stale {
            debug!("edited task was removed; closing the edit");
            self.editing = None;
        }
    }

    fn drain_notices(&mut self, line: usize) {
        let notices: Vec<Notice> = self.notices.drain(..).collect();
        for notice in notices {
            self.warn(line, notice.to_string());
        }
    }

    fn warn(&mut self, line: usize, message: String) {
        info!("line {}: {}", line, message);
        self.warnings.push(format!("line {}: {}", line, message));
    }
}
