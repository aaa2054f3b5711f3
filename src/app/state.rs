//! Central playground state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::layout::Rect;
use swipe_row::config::PlaygroundConfig;
use swipe_row::{SwipeAction, SwipeRowProps, SwipeRowState};

/// One demo row: what it shows, what it reveals, where it is.
pub struct DemoRow {
    pub content: String,
    pub props: SwipeRowProps,
    pub state: SwipeRowState,
}

/// A keyboard-focused action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFocus {
    pub row: usize,
    pub button: usize,
}

/// Top-level playground state.
pub struct AppState {
    pub rows: Vec<DemoRow>,
    pub config: PlaygroundConfig,
    /// Last known terminal size, for mouse hit-testing.
    pub terminal_area: Rect,
    /// Row whose foreground is under the pointer, if a drag is in progress.
    pub dragging: Option<usize>,
    pub focus: Option<ButtonFocus>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Messages posted by action callbacks, drained into the status bar.
    notices: Rc<RefCell<Vec<String>>>,
}

impl AppState {
    pub fn new(config: PlaygroundConfig) -> Self {
        let notices = Rc::new(RefCell::new(Vec::new()));

        let action = |label: &'static str, color: &'static str| {
            let notices = Rc::clone(&notices);
            SwipeAction::new(label, move || {
                notices.borrow_mut().push(format!("{label} clicked"));
            })
            .background_color(color)
            .width(80.0)
        };

        let row = |content: &str, actions: Vec<SwipeAction>| DemoRow {
            content: content.to_string(),
            props: SwipeRowProps::new(actions).drag_elastic(config.drag_elastic),
            state: SwipeRowState::new(),
        };

        let rows = vec![
            row(
                "Swipe me (Archive / Delete)",
                vec![action("Archive", "#f59e0b"), action("Delete", "#ef4444")],
            ),
            row(
                "Swipe me (Reply / Read)",
                vec![action("Reply", "#3b82f6"), action("Read", "#10b981")],
            ),
        ];

        Self {
            rows,
            config,
            terminal_area: Rect::default(),
            dragging: None,
            focus: None,
            should_quit: false,
            status_message: None,
            notices,
        }
    }

    /// Move callback messages into the status bar.  Returns `true` if any arrived.
    pub fn drain_notices(&mut self) -> bool {
        let latest = self.notices.borrow_mut().drain(..).last();
        match latest {
            Some(msg) => {
                self.status_message = Some(msg);
                true
            }
            None => false,
        }
    }

    /// Every (row, button) pair in reading order.
    pub fn focus_order(&self) -> Vec<ButtonFocus> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, r)| {
                (0..r.props.actions.len()).map(move |button| ButtonFocus { row, button })
            })
            .collect()
    }
}
