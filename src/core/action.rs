//! Action descriptors — the buttons hidden behind a swipe row.
//!
//! An action is identified only by its position in the ordered list handed
//! to the row; nothing here is keyed by label.

use std::fmt;
use std::rc::Rc;

/// Width used for an action that does not specify one, in px.
pub const DEFAULT_ACTION_WIDTH: f64 = 80.0;

/// Background used when an action has no colour of its own (slate).
pub const DEFAULT_ACTION_BACKGROUND: &str = "#64748b";

/// Foreground used when an action has no text colour of its own.
pub const DEFAULT_ACTION_COLOR: &str = "white";

// ───────────────────────────────────────── label ─────────────

/// Visual content of an action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Plain text. Doubles as the default accessible name.
    Text(String),
    /// A glyph / icon. Carries no accessible text of its own.
    Glyph(String),
}

impl Label {
    /// The plain text of the label, if it has any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            Label::Glyph(_) => None,
        }
    }

    /// What actually gets drawn inside the button.
    pub fn display(&self) -> &str {
        match self {
            Label::Text(s) | Label::Glyph(s) => s,
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

// ───────────────────────────────────────── action ────────────

/// One button revealed behind the row.
///
/// Cheap to clone: the callback is reference counted so the same action list
/// can be handed to every frame's widget.
#[derive(Clone)]
pub struct SwipeAction {
    pub label: Label,
    on_click: Rc<dyn Fn()>,
    pub background_color: Option<String>,
    pub color: Option<String>,
    pub width: Option<f64>,
    pub class_name: Option<String>,
    pub aria_label: Option<String>,
}

impl SwipeAction {
    pub fn new(label: impl Into<Label>, on_click: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Rc::new(on_click),
            background_color: None,
            color: None,
            width: None,
            class_name: None,
            aria_label: None,
        }
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Width in px, falling back to [`DEFAULT_ACTION_WIDTH`].
    ///
    /// A zero width counts as missing, so a `0` never collapses a button.
    pub fn resolved_width(&self) -> f64 {
        match self.width {
            Some(w) if w != 0.0 => w,
            _ => DEFAULT_ACTION_WIDTH,
        }
    }

    /// Accessible name: explicit label, else the text label, else a
    /// positional placeholder.
    pub fn accessible_name(&self, index: usize) -> String {
        if let Some(aria) = self.aria_label.as_deref().filter(|s| !s.is_empty()) {
            return aria.to_string();
        }
        match self.label.as_text() {
            Some(text) => text.to_string(),
            None => format!("Action {index}"),
        }
    }

    /// Run the click handler.
    pub fn invoke(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("label", &self.label)
            .field("background_color", &self.background_color)
            .field("color", &self.color)
            .field("width", &self.width)
            .field("class_name", &self.class_name)
            .field("aria_label", &self.aria_label)
            .finish_non_exhaustive()
    }
}
