use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Key hints for the current mode, as (key, description) pairs
pub fn mode_hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Navigate => &[
            ("a", "add"),
            ("space", "toggle"),
            ("e", "edit"),
            ("d", "remove"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Add => &[("Enter", "add"), ("Esc", "done")],
        Mode::Edit => &[("Enter", "save"), ("Esc", "cancel"), ("^T", "toggle")],
        Mode::Confirm => &[("y", "remove"), ("n", "keep")],
    }
}

/// Render the key hint line
pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.text).bg(bg);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" ", desc_style)];
    for (i, (key, desc)) in mode_hints(app.mode).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = match &app.status.message {
        Some(message) => {
            let color = if app.status.warning {
                app.theme.red
            } else {
                app.theme.text
            };
            Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(color).bg(bg),
            ))
        }
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, render_to_string};

    #[test]
    fn test_navigate_hints() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(80, 1, |frame, area| {
            render_key_hints(frame, &app, area);
        });
        assert_eq!(
            output,
            " a add  space toggle  e edit  d remove  ? help  q quit"
        );
    }

    #[test]
    fn test_status_message() {
        let mut app = app_with_tasks(&[]);
        app.status.warn("Task already exists");
        let output = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " Task already exists");
    }

    #[test]
    fn test_every_mode_has_hints() {
        for mode in [Mode::Navigate, Mode::Add, Mode::Edit, Mode::Confirm] {
            assert!(!mode_hints(mode).is_empty());
        }
    }
}
