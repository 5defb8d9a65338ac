use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// "You have N tasks", singular for one
pub fn counter_text(count: usize) -> String {
    format!(
        "You have {} task{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Render the header: app name on the left, task counter on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.header_bg;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let counter_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let title = " todo";
    let counter = format!("{} ", counter_text(app.tasks.task_count()));
    let width = area.width as usize;
    let used = title.chars().count() + counter.chars().count();

    let mut spans = vec![Span::styled(title, title_style)];
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    spans.push(Span::styled(counter, counter_style));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
