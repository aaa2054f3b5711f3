//! Computed element tree for a row — the styling / testing contract.
//!
//! A [`RowView`] is what a renderer draws: a clipping container holding a
//! fading background strip of buttons and a translated foreground.  Every
//! element carries its merged class list and inline style map.

use super::action::{SwipeAction, DEFAULT_ACTION_BACKGROUND, DEFAULT_ACTION_COLOR};
use super::color::normalize_color;
use super::row::SwipeRowProps;
use super::style::{merge_class_names, merge_styles, px, StyleMap};
use super::swipe::background_opacity;

pub const CONTAINER_CLASS: &str = "swipe-row";
pub const BACKGROUND_CLASS: &str = "swipe-row__actions";
pub const BUTTON_CLASS: &str = "swipe-row__action";
pub const FOREGROUND_CLASS: &str = "swipe-row__foreground";

/// A plain element: class list plus inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    pub class_name: String,
    pub style: StyleMap,
}

/// One action button as it will be drawn.
#[derive(Debug, Clone)]
pub struct ButtonView {
    pub index: usize,
    /// Accessible name (`aria-label`).
    pub name: String,
    /// Text drawn inside the button.
    pub text: String,
    pub width: f64,
    pub class_name: String,
    pub style: StyleMap,
    action: SwipeAction,
}

impl ButtonView {
    /// Fire the button's handler, as a click would.
    pub fn click(&self) {
        tracing::debug!(index = self.index, name = %self.name, "swipe action clicked");
        self.action.invoke();
    }
}

/// The whole row at a given offset.
#[derive(Debug, Clone)]
pub struct RowView {
    pub offset: f64,
    pub extent: f64,
    /// Background strip opacity in `[0, 1]`.
    pub opacity: f64,
    pub container: ElementView,
    pub background: ElementView,
    pub buttons: Vec<ButtonView>,
    pub foreground: ElementView,
    pub content: String,
}

impl RowView {
    /// Button whose accessible name is exactly `name`.
    pub fn button(&self, name: &str) -> Option<&ButtonView> {
        self.buttons.iter().find(|b| b.name == name)
    }

    /// True when `text` appears in the foreground content.
    pub fn has_text(&self, text: &str) -> bool {
        self.content.contains(text)
    }
}

fn format_unit(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn button_view(index: usize, action: &SwipeAction) -> ButtonView {
    let width = action.resolved_width();
    let background = action
        .background_color
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_ACTION_BACKGROUND);
    let color = action
        .color
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_ACTION_COLOR);

    let style = StyleMap::new()
        .with("width", px(width))
        .with("background-color", normalize_color(background))
        .with("color", normalize_color(color));

    ButtonView {
        index,
        name: action.accessible_name(index),
        text: action.label.display().to_string(),
        width,
        class_name: merge_class_names([Some(BUTTON_CLASS), action.class_name.as_deref()]),
        style,
        action: action.clone(),
    }
}

/// Build the element tree for `props` with foreground `content` at `offset`.
pub fn build_view(props: &SwipeRowProps, content: &str, offset: f64) -> RowView {
    let extent = props.extent();
    let opacity = background_opacity(offset, extent);

    let container_base = StyleMap::new()
        .with("position", "relative")
        .with("overflow", "hidden");
    let container = ElementView {
        class_name: merge_class_names([Some(CONTAINER_CLASS), props.class_name.as_deref()]),
        style: merge_styles(&container_base, props.style.as_ref()),
    };

    let background = ElementView {
        class_name: BACKGROUND_CLASS.to_string(),
        style: StyleMap::new().with("opacity", format_unit(opacity)),
    };

    let foreground_base = StyleMap::new().with("transform", format!("translateX({})", px(offset)));
    let foreground = ElementView {
        class_name: merge_class_names([Some(FOREGROUND_CLASS), props.inner_class_name.as_deref()]),
        style: merge_styles(&foreground_base, props.inner_style.as_ref()),
    };

    RowView {
        offset,
        extent,
        opacity,
        container,
        background,
        buttons: props
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| button_view(i, a))
            .collect(),
        foreground,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_button_style() {
        let props = SwipeRowProps::new(vec![SwipeAction::new("Go", || {})]);
        let view = build_view(&props, "row", 0.0);
        let b = view.button("Go").expect("button present");
        assert_eq!(b.style.get("width"), Some("80px"));
        assert_eq!(b.style.get("background-color"), Some("rgb(100, 116, 139)"));
        assert_eq!(b.style.get("color"), Some("rgb(255, 255, 255)"));
        assert_eq!(b.class_name, BUTTON_CLASS);
    }

    #[test]
    fn caller_classes_and_styles_are_merged() {
        let props = SwipeRowProps::new(vec![SwipeAction::new("Go", || {}).class_name("danger")])
            .class_name("list-item")
            .style(StyleMap::new().with("overflow", "visible").with("height", "48px"))
            .inner_class_name("content")
            .inner_style(StyleMap::new().with("background-color", "white"));
        let view = build_view(&props, "row", -20.0);

        assert_eq!(view.container.class_name, "swipe-row list-item");
        assert_eq!(view.container.style.get("overflow"), Some("visible"));
        assert_eq!(view.container.style.get("position"), Some("relative"));
        assert_eq!(view.container.style.get("height"), Some("48px"));
        assert_eq!(view.foreground.class_name, "swipe-row__foreground content");
        assert_eq!(view.foreground.style.get("transform"), Some("translateX(-20px)"));
        assert_eq!(view.foreground.style.get("background-color"), Some("white"));
        assert_eq!(view.buttons[0].class_name, "swipe-row__action danger");
    }

    #[test]
    fn background_fades_in_with_offset() {
        let props = SwipeRowProps::new(vec![SwipeAction::new("A", || {}), SwipeAction::new("B", || {})]);
        assert_eq!(build_view(&props, "", 0.0).background.style.get("opacity"), Some("0"));
        assert_eq!(build_view(&props, "", -40.0).background.style.get("opacity"), Some("0.5"));
        assert_eq!(build_view(&props, "", -120.0).background.style.get("opacity"), Some("1"));
    }

    #[test]
    fn unnamed_glyph_gets_positional_name() {
        use crate::core::action::Label;
        let props = SwipeRowProps::new(vec![
            SwipeAction::new("Reply", || {}),
            SwipeAction::new(Label::Glyph("★".into()), || {}),
        ]);
        let view = build_view(&props, "", 0.0);
        let names: Vec<_> = view.buttons.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Reply", "Action 1"]);
        assert_eq!(view.buttons[1].text, "★");
    }
}
