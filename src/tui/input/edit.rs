use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::edit_buffer::EditBuffer;
use crate::ops::task_ops::{AddOutcome, apply_intent};
use crate::tui::app::{App, Mode};

use super::navigate::{request_remove, toggle_cursor_task};

/// Apply a text-editing key to a buffer. Returns false if the key is not an
/// editing key.
fn edit_text(buf: &mut EditBuffer, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => buf.delete_word(),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => buf.move_home(),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => buf.move_end(),
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => buf.insert_char(c),
        (_, KeyCode::Backspace) => buf.backspace(),
        (_, KeyCode::Delete) => buf.delete(),
        (_, KeyCode::Left) => buf.move_left(),
        (_, KeyCode::Right) => buf.move_right(),
        (_, KeyCode::Home) => buf.move_home(),
        (_, KeyCode::End) => buf.move_end(),
        _ => return false,
    }
    true
}

/// Keys while typing into the add bar
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit_new_task(app),
        _ => {
            edit_text(&mut app.add_input, key);
        }
    }
}

/// Submit the add bar. Blank input is not submitted; anything else goes to
/// the list verbatim and the bar is cleared for the next entry.
fn submit_new_task(app: &mut App) {
    if app.add_input.is_blank() {
        return;
    }
    let title = app.add_input.take();
    if let AddOutcome::Added(id) = app.tasks.add_task(title, &mut app.status) {
        app.sync_rows();
        app.move_cursor_to(id);
    }
}

/// Keys while the row under the cursor is in edit mode
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            if let Some((row, task)) = app.cursor_row_mut() {
                let task = task.clone();
                row.cancel_edit(&task);
            }
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            let intent = app.rows.get_mut(app.cursor).and_then(|row| row.commit_edit());
            if let Some(intent) = intent {
                apply_intent(&mut app.tasks, intent, &mut app.pending_removal);
            }
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => toggle_cursor_task(app),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => request_remove(app),
        _ => {
            if let Some(buf) = app.rows.get_mut(app.cursor).and_then(|r| r.buffer_mut()) {
                edit_text(buf, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::{app_with_tasks, key, press};

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_add_task_from_bar() {
        let mut app = app_with_tasks(&["a"]);
        press(&mut app, "aBuy milk");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.tasks.task_count(), 2);
        assert_eq!(app.tasks.tasks()[1].title, "Buy milk");
        assert_eq!(app.add_input.text(), "");
        assert_eq!(app.mode, Mode::Add);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_blank_add_is_not_submitted() {
        let mut app = app_with_tasks(&[]);
        press(&mut app, "a   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.tasks.is_empty());
        assert_eq!(app.add_input.text(), "   ");
    }

    #[test]
    fn test_duplicate_add_warns() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, "aBuy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tasks.task_count(), 1);
        assert!(app.status.warning);
        assert!(
            app.status
                .message
                .as_deref()
                .is_some_and(|m| m.starts_with("Task already exists"))
        );
    }

    #[test]
    fn test_esc_leaves_add_mode() {
        let mut app = app_with_tasks(&[]);
        press(&mut app, "ahalf");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_edit_commit_renames() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, "e");
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.rows[0].has_focus());

        handle_key(&mut app, key(KeyCode::Home));
        for _ in 0..4 {
            handle_key(&mut app, key(KeyCode::Right));
        }
        press(&mut app, "oat ");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.tasks()[0].title, "Buy oat milk");
        assert!(!app.rows[0].has_focus());
    }

    #[test]
    fn test_edit_cancel_restores_title() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, "e");
        handle_key(&mut app, ctrl('w'));
        press(&mut app, "bread");
        assert_eq!(app.rows[0].buffer().text(), "Buy bread");
        handle_key(&mut app, key(KeyCode::Esc));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks.tasks()[0].title, "Buy milk");
        assert_eq!(app.rows[0].buffer().text(), "Buy milk");
    }

    #[test]
    fn test_typing_d_and_space_while_editing_edits_text() {
        let mut app = app_with_tasks(&["a"]);
        press(&mut app, "e d");
        assert_eq!(app.rows[0].buffer().text(), "a d");
        assert_eq!(app.tasks.task_count(), 1);
        assert!(!app.tasks.tasks()[0].done);
        assert!(app.pending_removal.is_none());
    }

    #[test]
    fn test_delete_refused_while_editing() {
        let mut app = app_with_tasks(&["a"]);
        press(&mut app, "e");
        handle_key(&mut app, ctrl('d'));
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.pending_removal.is_none());
        assert_eq!(
            app.status.message.as_deref(),
            Some("Finish editing before removing")
        );
    }

    #[test]
    fn test_toggle_while_editing() {
        let mut app = app_with_tasks(&["a"]);
        press(&mut app, "e");
        handle_key(&mut app, ctrl('t'));
        assert!(app.tasks.tasks()[0].done);
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.rows[0].is_editing());
    }
}
