use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_ops::apply_intent;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor
        (_, KeyCode::Down | KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Up | KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => {
            app.cursor = app.rows.len().saturating_sub(1);
        }

        // Add bar
        (_, KeyCode::Char('a') | KeyCode::Char('n')) => {
            app.mode = Mode::Add;
        }

        // Row intents
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_cursor_task(app),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => toggle_cursor_task(app),
        (_, KeyCode::Enter | KeyCode::Char('e')) => start_edit(app),
        (_, KeyCode::Char('d') | KeyCode::Delete) => request_remove(app),

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.rows.is_empty() {
        return;
    }
    let max = app.rows.len() - 1;
    app.cursor = app.cursor.saturating_add_signed(delta).min(max);
}

/// Forward the toggle intent of the row under the cursor
pub(super) fn toggle_cursor_task(app: &mut App) {
    let Some(row) = app.rows.get(app.cursor) else {
        return;
    };
    let intent = row.toggle();
    apply_intent(&mut app.tasks, intent, &mut app.pending_removal);
}

fn start_edit(app: &mut App) {
    let Some((row, task)) = app.cursor_row_mut() else {
        return;
    };
    let task = task.clone();
    row.start_edit(&task);
    app.mode = Mode::Edit;
}

pub(super) fn request_remove(app: &mut App) {
    let Some(row) = app.rows.get(app.cursor) else {
        return;
    };
    let Some(intent) = row.request_delete() else {
        app.status.warn("Finish editing before removing");
        return;
    };
    apply_intent(&mut app.tasks, intent, &mut app.pending_removal);
    if app.pending_removal.is_some() {
        app.mode = Mode::Confirm;
    }
}
