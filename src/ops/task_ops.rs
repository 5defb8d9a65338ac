use std::fmt;

use chrono::Utc;
use log::{debug, info};

use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// A user-facing message produced by a rejected operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// `add_task` was given a title that already exists
    DuplicateTitle { title: String },
}

impl Notice {
    pub fn heading(&self) -> &'static str {
        match self {
            Notice::DuplicateTitle { .. } => "Task already exists",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::DuplicateTitle { .. } => "You cannot add a task with the same name",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.heading(), self.message())
    }
}

/// Fire-and-forget sink for notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// The user's answer to a removal prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirm,
    Decline,
}

impl From<bool> for Decision {
    fn from(yes: bool) -> Self {
        if yes {
            Decision::Confirm
        } else {
            Decision::Decline
        }
    }
}

/// A pending removal waiting for the user's answer.
///
/// Not `Clone`: it is consumed by [`TaskList::resolve_removal`], so each
/// request gets exactly one outcome.
#[derive(Debug, PartialEq, Eq)]
pub struct RemovalRequest {
    id: TaskId,
}

impl RemovalRequest {
    pub const TITLE: &'static str = "Remove item";
    pub const PROMPT: &'static str = "Are you sure you want to remove this item?";

    pub fn id(&self) -> TaskId {
        self.id
    }
}

/// Asks the user a yes/no question about a removal.
///
/// Implementations hold on to the request and hand it back to
/// [`TaskList::resolve_removal`] once the user has answered.
pub trait Confirmer {
    fn ask(&mut self, request: RemovalRequest);
}

/// A single pending slot, as used by the TUI confirm popup.
impl Confirmer for Option<RemovalRequest> {
    fn ask(&mut self, request: RemovalRequest) {
        *self = Some(request);
    }
}

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// A request emitted by a task row for the controller to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Toggle(TaskId),
    Rename { id: TaskId, title: String },
    Remove(TaskId),
}

/// Result of [`TaskList::add_task`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    Duplicate,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

type Observer = Box<dyn FnMut(&[Task])>;

/// The single owner of the ordered task list.
///
/// All mutation goes through this type. Operations addressed by id treat an
/// unknown id as a no-op: stale callbacks from a row whose task is already
/// gone must not fail.
pub struct TaskList {
    tasks: Vec<Task>,
    /// Highest id ever assigned, including ids of removed tasks
    last_id: Option<TaskId>,
    clock: fn() -> i64,
    revision: u64,
    observers: Vec<Observer>,
}

impl fmt::Debug for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskList")
            .field("tasks", &self.tasks)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        TaskList::new()
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::with_clock(now_millis)
    }

    /// Use a custom millisecond clock for id assignment
    pub fn with_clock(clock: fn() -> i64) -> Self {
        TaskList {
            tasks: Vec::new(),
            last_id: None,
            clock,
            revision: 0,
            observers: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Bumped once per applied mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register an observer called with the full list after every applied
    /// mutation. Rejected and no-op operations do not notify.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Task]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Append a task unless one with exactly the same title already exists.
    ///
    /// The title is taken verbatim: trimming and emptiness checks belong to
    /// the input that produced it.
    pub fn add_task(&mut self, title: String, notifier: &mut dyn Notifier) -> AddOutcome {
        if self.tasks.iter().any(|t| t.title == title) {
            info!("rejected duplicate task title {:?}", title);
            notifier.notify(Notice::DuplicateTitle { title });
            return AddOutcome::Duplicate;
        }

        let id = self.next_id();
        debug!("add task {} {:?}", id, title);
        self.tasks.push(Task::new(id, title));
        self.changed();
        AddOutcome::Added(id)
    }

    /// Flip the done flag. Returns whether a task was found.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(t) => t,
            None => return false,
        };
        task.done = !task.done;
        debug!("toggle task {} done={}", id, task.done);
        self.changed();
        true
    }

    /// Replace the title verbatim. Uniqueness is not re-checked here.
    pub fn rename_task(&mut self, id: TaskId, new_title: String) -> bool {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(t) => t,
            None => return false,
        };
        debug!("rename task {} {:?} -> {:?}", id, task.title, new_title);
        task.title = new_title;
        self.changed();
        true
    }

    /// Ask for confirmation before removing a task. Nothing changes until
    /// the request comes back through [`TaskList::resolve_removal`].
    pub fn remove_task(&self, id: TaskId, confirmer: &mut dyn Confirmer) {
        confirmer.ask(RemovalRequest { id });
    }

    /// Complete a removal. Returns whether a task was removed.
    pub fn resolve_removal(&mut self, request: RemovalRequest, decision: Decision) -> bool {
        if decision == Decision::Decline {
            debug!("removal of task {} declined", request.id);
            return false;
        }
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != request.id);
        if self.tasks.len() == before {
            return false;
        }
        debug!("removed task {}", request.id);
        self.changed();
        true
    }

    fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let id = match self.last_id {
            Some(last) if now <= last.0 => TaskId(last.0 + 1),
            _ => TaskId(now),
        };
        self.last_id = Some(id);
        id
    }

    fn changed(&mut self) {
        self.revision += 1;
        for observer in &mut self.observers {
            observer(&self.tasks);
        }
    }
}

/// Route a row intent into the matching controller operation
pub fn apply_intent(list: &mut TaskList, intent: Intent, confirmer: &mut dyn Confirmer) {
    match intent {
        Intent::Toggle(id) => {
            list.toggle_done(id);
        }
        Intent::Rename { id, title } => {
            list.rename_task(id, title);
        }
        Intent::Remove(id) => list.remove_task(id, confirmer),
    }
}
