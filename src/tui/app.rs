use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::edit_buffer::EditBuffer;
use crate::ops::task_ops::{Notice, Notifier, RemovalRequest, TaskList};
use crate::ops::task_row::TaskRow;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title in the add bar
    Add,
    /// The row under the cursor is in edit mode
    Edit,
    /// Waiting for a yes/no answer on a removal
    Confirm,
}

/// Message shown in the status row until the next key press
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub message: Option<String>,
    pub warning: bool,
}

impl StatusLine {
    pub fn info(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.warning = false;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.warning = true;
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.warning = false;
    }
}

impl Notifier for StatusLine {
    fn notify(&mut self, notice: Notice) {
        self.warn(notice.to_string());
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    /// One row per task, in list order (kept in step by `sync_rows`)
    pub rows: Vec<TaskRow>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    /// Cursor index into `rows`
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Text typed into the add bar
    pub add_input: EditBuffer,
    /// Removal awaiting confirmation (Confirm mode)
    pub pending_removal: Option<RemovalRequest>,
    pub status: StatusLine,
    synced_revision: Option<u64>,
}

impl App {
    pub fn new(tasks: TaskList, config: &Config) -> Self {
        let mut app = App {
            tasks,
            rows: Vec::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            add_input: EditBuffer::default(),
            pending_removal: None,
            status: StatusLine::default(),
            synced_revision: None,
        };
        app.sync_rows();
        app
    }

    /// Rebuild `rows` after the task list changed. Rows keep their edit state
    /// across rebuilds; rows of removed tasks are dropped.
    pub fn sync_rows(&mut self) {
        let revision = self.tasks.revision();
        if self.synced_revision == Some(revision) {
            return;
        }
        let mut old = std::mem::take(&mut self.rows);
        self.rows = self
            .tasks
            .tasks()
            .iter()
            .map(|task| match old.iter().position(|r| r.task_id() == task.id) {
                Some(i) => {
                    let mut row = old.swap_remove(i);
                    row.refresh(task);
                    row
                }
                None => TaskRow::new(task),
            })
            .collect();
        self.synced_revision = Some(revision);
        self.clamp_cursor();

        if self.mode == Mode::Edit && !self.rows.iter().any(TaskRow::is_editing) {
            self.mode = Mode::Navigate;
        }
    }

    pub fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        }
    }

    /// The row under the cursor together with its task snapshot
    pub fn cursor_row_mut(&mut self) -> Option<(&mut TaskRow, &Task)> {
        let task = self.tasks.tasks().get(self.cursor)?;
        let row = self.rows.get_mut(self.cursor)?;
        Some((row, task))
    }

    /// Move the cursor to the task with this id
    pub fn move_cursor_to(&mut self, id: TaskId) {
        if let Some(pos) = self.tasks.position(id) {
            self.cursor = pos;
        }
    }
}

/// Options for launching the TUI
#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: Config,
    /// Titles to add before the first draw
    pub seed: Vec<String>,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut tasks = TaskList::new();
    tasks.subscribe(|tasks| debug!("task list changed: {} task(s)", tasks.len()));

    let mut status = StatusLine::default();
    for title in options.seed {
        tasks.add_task(title, &mut status);
    }

    let mut app = App::new(tasks, &options.config);
    app.status = status;
    info!("starting TUI with {} task(s)", app.tasks.task_count());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!("exiting TUI with {} task(s)", app.tasks.task_count());
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.sync_rows();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
