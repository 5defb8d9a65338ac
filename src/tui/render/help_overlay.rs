use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            ("\u{2191}\u{2193}/jk", "Move cursor"),
            ("g/G", "First / last task"),
            ("a/n", "Add a task"),
            ("space/x", "Toggle done"),
            ("e/Enter", "Edit title"),
            ("d/Del", "Remove (asks first)"),
            ("q", "Quit"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter", "Save title"),
            ("Esc", "Discard changes"),
            ("^T", "Toggle done"),
            ("^W", "Delete word"),
            ("^A/^E", "Start / end of line"),
        ],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (name, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(format!(" {}", name), header_style)));
        for (key, desc) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " Press any key to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let overlay_area = centered_rect_fixed(40, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
