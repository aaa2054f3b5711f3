use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::StatefulWidget};
use swipe_row::{SwipeAction, SwipePhase, SwipeRow, SwipeRowProps, SwipeRowState};

fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, move || inner.set(inner.get() + 1))
}

fn render(row: SwipeRow<'_>, state: &mut SwipeRowState, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, 3);
    let mut buf = Buffer::empty(area);
    row.render(area, &mut buf, state);
    buf
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()).to_string())
        .collect()
}

fn settle(state: &mut SwipeRowState) {
    let mut guard = 0;
    while state.tick(Duration::from_millis(16)) {
        guard += 1;
        assert!(guard < 500, "row never settled");
    }
}

#[test]
fn renders_children() {
    let row = SwipeRow::new("Swipe Content", vec![]);
    let mut state = SwipeRowState::new();
    assert!(row.view(&state).has_text("Swipe Content"));

    let buf = render(row, &mut state, 40);
    assert!(row_text(&buf, 1).contains("Swipe Content"));
}

#[test]
fn one_custom_action() {
    let (hits, on_click) = counter();
    let row = SwipeRow::new("Swipe Content", vec![SwipeAction::new("Custom", on_click)]);
    let state = SwipeRowState::new();
    let view = row.view(&state);

    assert_eq!(view.buttons.len(), 1);
    let button = view.button("Custom").expect("button named Custom");
    button.click();
    assert_eq!(hits.get(), 1);
}

#[test]
fn multiple_custom_actions() {
    let (hits1, a1) = counter();
    let (hits2, a2) = counter();
    let row = SwipeRow::new(
        "Swipe Content",
        vec![SwipeAction::new("Action 1", a1), SwipeAction::new("Action 2", a2)],
    );
    let view = row.view(&SwipeRowState::new());

    let first = view.button("Action 1").expect("first button");
    let second = view.button("Action 2").expect("second button");
    assert_ne!(first.index, second.index);

    second.click();
    assert_eq!((hits1.get(), hits2.get()), (0, 1));
}

#[test]
fn custom_background_and_width() {
    let row = SwipeRow::new(
        "Swipe Content",
        vec![SwipeAction::new("Color Me", || {})
            .background_color("rgb(255,0,0)")
            .width(100.0)],
    );
    let view = row.view(&SwipeRowState::new());
    let btn = view.button("Color Me").expect("button");
    assert_eq!(btn.style.get("background-color"), Some("rgb(255, 0, 0)"));
    assert_eq!(btn.style.get("width"), Some("100px"));
}

#[test]
fn aria_label_overrides_text() {
    let row = SwipeRow::new(
        "Row",
        vec![SwipeAction::new("🗑", || {}).aria_label("Delete message")],
    );
    let view = row.view(&SwipeRowState::new());
    assert!(view.button("Delete message").is_some());
    assert!(view.button("🗑").is_none());
}

#[test]
fn extent_follows_widths_or_override() {
    let actions = || {
        vec![
            SwipeAction::new("A", || {}).width(100.0),
            SwipeAction::new("B", || {}),
        ]
    };
    assert_eq!(SwipeRowProps::new(actions()).extent(), -180.0);
    assert_eq!(SwipeRowProps::new(actions()).max_swipe(-90.0).extent(), -90.0);
    assert_eq!(SwipeRowProps::new(vec![]).extent(), 0.0);
}

#[test]
fn swipe_reveals_faded_in_buttons() {
    let props = SwipeRowProps::new(vec![
        SwipeAction::new("Archive", || {}).background_color("#f59e0b"),
        SwipeAction::new("Delete", || {}).background_color("#ef4444"),
    ]);
    let mut state = SwipeRowState::new();

    // Closed: the foreground covers the whole row.
    let buf = render(SwipeRow::from_props("Mail", props.clone()), &mut state, 40);
    assert!(!row_text(&buf, 1).contains("Delete"));

    state.drag_start(&props, 300.0);
    state.drag_to(150.0);
    state.drag_end();
    assert_eq!(state.phase(), SwipePhase::Settling { open: true });
    settle(&mut state);
    assert_eq!(state.phase(), SwipePhase::Open);

    let buf = render(SwipeRow::from_props("Mail", props), &mut state, 40);
    let line = row_text(&buf, 1);
    assert!(line.contains("Archive"), "{line:?}");
    assert!(line.contains("Delete"), "{line:?}");
    assert!(line.find("Archive") < line.find("Delete"));
    // Fully open → full opacity → the button's own colour.
    let cell = buf.cell((35, 1)).expect("cell inside Delete");
    assert_eq!(cell.bg, Color::Rgb(0xef, 0x44, 0x44));
}

#[test]
fn empty_actions_never_open() {
    let props = SwipeRowProps::new(vec![]);
    let mut state = SwipeRowState::new();
    state.drag_start(&props, 300.0);
    state.drag_to(0.0);
    state.drag_end();
    settle(&mut state);
    assert_eq!(state.offset(), 0.0);
    assert_eq!(state.phase(), SwipePhase::Closed);
}
