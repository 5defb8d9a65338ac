use crate::model::task::{Task, TaskId};
use crate::ops::edit_buffer::EditBuffer;
use crate::ops::task_ops::Intent;

/// Whether a row is showing its title or editing it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Per-row inline edit state.
///
/// A row never touches the task list. It reads a `&Task` snapshot and turns
/// user actions into [`Intent`]s for the controller. Input focus follows the
/// mode: it is re-synced on every transition, so `has_focus()` is true
/// exactly while editing.
#[derive(Debug, Clone)]
pub struct TaskRow {
    task_id: TaskId,
    mode: RowMode,
    buffer: EditBuffer,
    focused: bool,
}

impl TaskRow {
    pub fn new(task: &Task) -> Self {
        TaskRow {
            task_id: task.id,
            mode: RowMode::Viewing,
            buffer: EditBuffer::new(&task.title),
            focused: false,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    /// Mutable access to the edit buffer. Only meaningful while editing.
    pub fn buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        if self.is_editing() {
            Some(&mut self.buffer)
        } else {
            None
        }
    }

    /// Viewing → Editing. The buffer starts from the task's current title.
    pub fn start_edit(&mut self, task: &Task) {
        if self.is_editing() {
            return;
        }
        self.buffer.reset(&task.title);
        self.set_mode(RowMode::Editing);
    }

    /// Editing → Viewing, discarding unsaved changes.
    pub fn cancel_edit(&mut self, task: &Task) {
        if !self.is_editing() {
            return;
        }
        self.buffer.reset(&task.title);
        self.set_mode(RowMode::Viewing);
    }

    /// Editing → Viewing, handing the buffered text to the controller.
    /// The row leaves edit mode whether or not the rename is applied.
    pub fn commit_edit(&mut self) -> Option<Intent> {
        if !self.is_editing() {
            return None;
        }
        let title = self.buffer.text().to_string();
        self.set_mode(RowMode::Viewing);
        Some(Intent::Rename {
            id: self.task_id,
            title,
        })
    }

    /// Toggle is always forwarded, in both modes.
    pub fn toggle(&self) -> Intent {
        Intent::Toggle(self.task_id)
    }

    /// Delete is refused while editing.
    pub fn request_delete(&self) -> Option<Intent> {
        match self.mode {
            RowMode::Viewing => Some(Intent::Remove(self.task_id)),
            RowMode::Editing => None,
        }
    }

    /// Keep the viewing buffer in step with the task after outside changes
    pub fn refresh(&mut self, task: &Task) {
        if !self.is_editing() && self.buffer.text() != task.title {
            self.buffer.reset(&task.title);
        }
    }

    fn set_mode(&mut self, mode: RowMode) {
        self.mode = mode;
        self.focused = mode == RowMode::Editing;
    }
}
