use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::task_ops::RemovalRequest;
use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

/// Render the removal confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let request = match &app.pending_removal {
        Some(r) => r,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let inner_w = (popup_w as usize).saturating_sub(4);

    let title = app
        .tasks
        .get(request.id())
        .map(|t| t.title.as_str())
        .unwrap_or("");

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", RemovalRequest::TITLE),
            header_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", RemovalRequest::PROMPT),
            text_style,
        )),
        Line::from(Span::styled(
            format!("   {}", unicode::truncate_to_width(title, inner_w)),
            bright_style,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ", text_style),
            Span::styled("y", key_style),
            Span::styled(" yes  ", text_style),
            Span::styled("n", key_style),
            Span::styled(" no", text_style),
        ]),
    ];

    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, press, render_to_string};

    #[test]
    fn test_popup_shows_prompt_and_title() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, "d");
        let output = render_to_string(60, 12, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Remove item"));
        assert!(output.contains("Are you sure you want to remove this item?"));
        assert!(output.contains("Buy milk"));
        assert!(output.contains("y yes  n no"));
    }

    #[test]
    fn test_nothing_without_pending_removal() {
        let app = app_with_tasks(&["Buy milk"]);
        let output = render_to_string(60, 12, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
