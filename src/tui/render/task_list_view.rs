use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::ops::task_row::TaskRow;
use crate::tui::app::App;
use crate::util::unicode;

/// Width of the ` [x] ` prefix in front of each title
const PREFIX_WIDTH: usize = 5;

/// Render the task list, one line per task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    adjust_scroll(app, visible_height);

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, (task, row)) in app
        .tasks
        .tasks()
        .iter()
        .zip(&app.rows)
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let (line, caret) = task_line(app, task, row, is_cursor, width);
        lines.push(line);

        if let Some(col) = caret.filter(|&c| c < width) {
            let x = area.x + col as u16;
            let y = area.y + (i - app.scroll_offset) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Keep the cursor row inside the visible window
fn adjust_scroll(app: &mut App, visible_height: usize) {
    if visible_height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
}

/// One task line, plus the caret column when the row has focus
fn task_line<'a>(
    app: &App,
    task: &Task,
    row: &TaskRow,
    is_cursor: bool,
    width: usize,
) -> (Line<'a>, Option<usize>) {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let box_style = if task.done {
        Style::default().fg(theme.green).bg(bg)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let mut title_style = Style::default().fg(theme.task_color(task.done)).bg(bg);
    if task.done {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if row.is_editing() {
        title_style = Style::default().fg(theme.text_bright).bg(bg);
    }

    // Row actions, mirroring the edit/cancel and remove buttons
    let (action, remove_style) = if row.is_editing() {
        ("esc cancel", Style::default().fg(theme.dim).bg(bg))
    } else {
        ("e edit", Style::default().fg(theme.red).bg(bg))
    };
    let actions: Vec<Span> = if is_cursor {
        vec![
            Span::styled(action, Style::default().fg(theme.text).bg(bg)),
            Span::styled(" \u{2502} ", Style::default().fg(theme.dim).bg(bg)),
            Span::styled("d remove ", remove_style),
        ]
    } else {
        Vec::new()
    };
    let actions_width: usize = actions
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();

    let title_budget = width.saturating_sub(PREFIX_WIDTH + actions_width + 1);
    // An editing row scrolls its buffer so the caret stays inside the budget
    let (text, caret) = if row.has_focus() {
        let buf = row.buffer();
        let col = buf.cursor_col();
        let skip = (col + 1).saturating_sub(title_budget);
        let (visible, skipped) = unicode::skip_cells(buf.text(), skip);
        (visible, Some(PREFIX_WIDTH + col.saturating_sub(skipped)))
    } else {
        (task.title.as_str(), None)
    };
    let title = unicode::truncate_to_width(text, title_budget);
    let title_width = unicode::display_width(&title);

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(format!("[{}]", task.checkbox_char()), box_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(title, title_style),
    ];

    if is_cursor {
        let used = PREFIX_WIDTH + title_width + actions_width;
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        }
        spans.extend(actions);
    }

    (Line::from(spans), caret)
}
