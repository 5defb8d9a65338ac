use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops::Decision;
use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let decision = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Decision::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Decision::Decline,
        _ => return,
    };

    app.mode = Mode::Navigate;
    let Some(request) = app.pending_removal.take() else {
        return;
    };
    let title = app
        .tasks
        .get(request.id())
        .map(|t| t.title.clone())
        .unwrap_or_default();
    if app.tasks.resolve_removal(request, decision) {
        app.status.info(format!("removed \"{}\"", title));
    }
}
