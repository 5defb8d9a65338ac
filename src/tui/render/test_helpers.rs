use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::task_ops::TaskList;
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Like `render_to_string`, also returning where the terminal cursor was left
pub fn render_with_cursor<F>(w: u16, h: u16, f: F) -> (String, (u16, u16))
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    let pos = terminal.get_cursor_position().unwrap();
    (buffer_to_string(terminal.backend().buffer()), (pos.x, pos.y))
}

/// Render the whole screen at the default test size
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| {
        crate::tui::render::render(frame, app);
    })
}

/// An App with the given titles already added, cursor on the first task
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut tasks = TaskList::new();
    let mut notices = Vec::new();
    for title in titles {
        tasks.add_task(title.to_string(), &mut notices);
    }
    App::new(tasks, &Config::default())
}

/// A key press with no modifiers
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Type each character of `keys` as a separate key press
pub fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}
