//! Input handling — maps key/mouse events to state mutations.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use swipe_row::{RowGeometry, RowHit};

use super::state::{AppState, ButtonFocus};
use swipe_row::ui::layout::PlaygroundLayout;

// ── Keyboard ────────────────────────────────────────────────────

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Tab => move_focus(state, 1),
        KeyCode::BackTab => move_focus(state, -1),
        KeyCode::Enter | KeyCode::Char(' ') => activate_focused(state),
        _ => {}
    }
}

fn move_focus(state: &mut AppState, step: isize) {
    let order = state.focus_order();
    if order.is_empty() {
        state.focus = None;
        return;
    }
    let len = order.len() as isize;
    let next = match state.focus.and_then(|f| order.iter().position(|o| *o == f)) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };
    state.focus = Some(order[next as usize]);
}

fn activate_focused(state: &mut AppState) {
    if let Some(ButtonFocus { row, button }) = state.focus {
        if let Some(r) = state.rows.get(row) {
            r.state.click(&r.props, button);
        }
    }
}

// ── Mouse ───────────────────────────────────────────────────────

fn pointer_px(state: &AppState, column: u16) -> f64 {
    column as f64 * state.config.cell_width_px
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let layout = PlaygroundLayout::from_area(state.terminal_area, state.rows.len());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A second press without a release (lost event) ends the old drag.
            release_drag(state);

            let Some(idx) = layout.row_at(mouse.column, mouse.row) else {
                return;
            };
            let x = pointer_px(state, mouse.column);
            let cell_width = state.config.cell_width_px;
            let row = &mut state.rows[idx];
            let geom = RowGeometry::compute(
                layout.rows[idx],
                &row.props.actions,
                row.state.offset(),
                cell_width,
            );

            match geom.hit(mouse.column, mouse.row) {
                Some(RowHit::Foreground) => {
                    row.state.drag_start(&row.props, x);
                    state.dragging = Some(idx);
                }
                Some(RowHit::Button(button)) => {
                    row.state.click(&row.props, button);
                    state.focus = Some(ButtonFocus { row: idx, button });
                }
                None => {}
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(idx) = state.dragging {
                let x = pointer_px(state, mouse.column);
                state.rows[idx].state.drag_to(x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => release_drag(state),
        _ => {}
    }
}

/// End any drag in progress and let the row settle.
pub fn release_drag(state: &mut AppState) {
    if let Some(idx) = state.dragging.take() {
        if let Some(row) = state.rows.get_mut(idx) {
            row.state.drag_end();
        }
    }
}

// ── Animation ───────────────────────────────────────────────────

/// Advance every row's settle animation.  Returns `true` while any row moves.
pub fn advance(state: &mut AppState, dt: Duration) -> bool {
    let mut moving = false;
    for row in &mut state.rows {
        moving |= row.state.tick(dt);
    }
    moving
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;
    use swipe_row::config::PlaygroundConfig;
    use swipe_row::SwipePhase;

    fn app() -> AppState {
        let mut state = AppState::new(PlaygroundConfig::default());
        state.terminal_area = Rect::new(0, 0, 60, 20);
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        let mut k = KeyEvent::new(code, KeyModifiers::NONE);
        k.kind = KeyEventKind::Press;
        k
    }

    fn settle(state: &mut AppState) {
        let mut guard = 0;
        while advance(state, Duration::from_millis(16)) {
            guard += 1;
            assert!(guard < 500);
        }
    }

    #[test]
    fn mouse_swipe_opens_then_click_reports() {
        let mut state = app();
        // First row spans columns 2..58 on rows 2..5.
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 50, 3));
        assert_eq!(state.dragging, Some(0));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 35, 3));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 35, 3));
        assert_eq!(state.dragging, None);
        settle(&mut state);
        assert_eq!(state.rows[0].state.phase(), SwipePhase::Open);
        assert_eq!(state.rows[0].state.offset(), -160.0);

        // Delete occupies the last 10 columns of the row.
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 55, 3));
        assert!(state.drain_notices());
        assert_eq!(state.status_message.as_deref(), Some("Delete clicked"));
        // Clicking does not close the row.
        assert_eq!(state.rows[0].state.offset(), -160.0);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut state = app();
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 50, 7));
        assert_eq!(state.dragging, Some(1));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 45, 7));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 45, 7));
        settle(&mut state);
        assert_eq!(state.rows[1].state.offset(), 0.0);
    }

    #[test]
    fn tab_cycles_focus_and_enter_activates() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, Some(ButtonFocus { row: 0, button: 0 }));
        handle_key(&mut state, key(KeyCode::BackTab));
        handle_key(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.focus, Some(ButtonFocus { row: 1, button: 0 }));
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.drain_notices());
        assert_eq!(state.status_message.as_deref(), Some("Reply clicked"));
    }

    #[test]
    fn quit_keys() {
        let mut state = app();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert!(state.should_quit);
    }
}
