use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Add a new task...";

/// Render the add bar. While typing, the terminal cursor sits in the bar.
pub fn render_add_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = app.mode == Mode::Add;
    let border_color = if active {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let text = app.add_input.text();
    let line = if text.is_empty() && !active {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        // Keep the cursor in view by scrolling long input horizontally
        let width = inner.width as usize;
        let cursor_col = app.add_input.cursor_col();
        let skip = (cursor_col + 1).saturating_sub(width);
        let (visible, skipped) = unicode::skip_cells(text, skip);
        if active && inner.width > 0 && inner.height > 0 {
            let x = inner.x + cursor_col.saturating_sub(skipped) as u16;
            frame.set_cursor_position((x, inner.y));
        }
        Line::from(Span::styled(
            unicode::truncate_to_width(visible, width),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
