pub mod add_bar;
pub mod confirm_popup;
pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod task_list_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | add bar | task list | key hints | status row
    let hints_height = if app.show_key_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // header with counter
            Constraint::Length(3),            // bordered add bar
            Constraint::Min(1),               // task list
            Constraint::Length(hints_height), // key hints
            Constraint::Length(1),            // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    add_bar::render_add_bar(frame, app, chunks[1]);
    task_list_view::render_task_list(frame, app, chunks[2]);
    if app.show_key_hints {
        status_row::render_key_hints(frame, app, chunks[3]);
    }
    status_row::render_status_row(frame, app, chunks[4]);

    // Overlays (rendered on top of everything)
    if app.pending_removal.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// A `width` x `height` rect centered in `area`, clipped to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use super::test_helpers::{app_with_tasks, key, press, render_app};
    use crate::tui::input::handle_key;

    #[test]
    fn test_full_screen_layout() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        press(&mut app, "j ");
        let output = render_app(&mut app);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with(" todo"));
        assert!(lines[0].ends_with("You have 2 tasks"));
        assert!(lines[2].contains("Add a new task..."));
        assert_eq!(lines[4], " [ ] Buy milk");
        assert!(lines[5].starts_with(" [x] Walk dog"));
        assert!(output.contains(" a add  space toggle"));
    }

    #[test]
    fn test_counter_follows_adds_and_removals() {
        let mut app = app_with_tasks(&[]);
        press(&mut app, "aBuy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(render_app(&mut app).contains("You have 1 task"));

        press(&mut app, "dy");
        assert!(render_app(&mut app).contains("You have 0 tasks"));
    }

    #[test]
    fn test_confirm_popup_drawn_over_list() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, "d");
        let output = render_app(&mut app);
        assert!(output.contains("Are you sure you want to remove this item?"));
        assert!(output.contains(" y remove  n keep"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.show_key_hints = false;
        let output = render_app(&mut app);
        assert!(!output.contains("space toggle"));
    }
}
