//! Ratatui widget that draws a swipe row: a fading strip of action buttons
//! behind a horizontally shifted foreground.
//!
//! Widths and offsets are kept in px by the core; `cell_width` converts them
//! to terminal columns.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::core::action::SwipeAction;
use crate::core::color::{parse_color, Rgb};
use crate::core::motion::MotionDriver;
use crate::core::row::{SwipeRowProps, SwipeRowState};
use crate::core::style::StyleMap;
use crate::core::view::{build_view, RowView};

use super::theme::Theme;

/// Default px per terminal column: an 80px button is 10 columns wide.
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;

// ───────────────────────────────────────── geometry ──────────

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Foreground,
    Button(usize),
}

/// Cell-space placement of a row's layers at one offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGeometry {
    pub area: Rect,
    /// Horizontal foreground shift in columns (negative = swiped left).
    pub shift: i32,
    /// Button rects clipped to `area`, in action order.  A button pushed
    /// entirely outside the row gets an empty rect.
    pub buttons: Vec<Rect>,
}

fn columns(px: f64, cell_width: f64) -> i32 {
    ((px / cell_width).round() as i32).max(1)
}

impl RowGeometry {
    pub fn compute(area: Rect, actions: &[SwipeAction], offset: f64, cell_width: f64) -> Self {
        let cell_width = cell_width.max(1.0);
        let widths: Vec<i32> = actions
            .iter()
            .map(|a| columns(a.resolved_width(), cell_width))
            .collect();
        let strip: i32 = widths.iter().sum();

        // Right-aligned strip, buttons left to right in action order.
        let left = area.x as i32;
        let right = area.right() as i32;
        let mut x = right - strip;
        let buttons = widths
            .iter()
            .map(|&w| {
                let x0 = x.max(left);
                let x1 = (x + w).min(right);
                x += w;
                if x1 <= x0 {
                    Rect::new(area.x, area.y, 0, 0)
                } else {
                    Rect::new(x0 as u16, area.y, (x1 - x0) as u16, area.height)
                }
            })
            .collect();

        Self {
            area,
            shift: (offset / cell_width).round() as i32,
            buttons,
        }
    }

    /// Columns covered by the foreground, as a half-open range, clipped.
    pub fn foreground_span(&self) -> (i32, i32) {
        let left = self.area.x as i32;
        let right = self.area.right() as i32;
        ((left + self.shift).max(left), (right + self.shift).min(right))
    }

    pub fn hit(&self, col: u16, row: u16) -> Option<RowHit> {
        if !self.area.contains(Position::new(col, row)) {
            return None;
        }
        let (fg_left, fg_right) = self.foreground_span();
        let c = col as i32;
        if c >= fg_left && c < fg_right {
            return Some(RowHit::Foreground);
        }
        self.buttons
            .iter()
            .position(|r| r.contains(Position::new(col, row)))
            .map(RowHit::Button)
    }
}

// ───────────────────────────────────────── widget ────────────

/// The swipe row widget — created fresh each frame.
pub struct SwipeRow<'a> {
    content: Text<'a>,
    props: SwipeRowProps,
    cell_width: f64,
    focused: Option<usize>,
}

impl<'a> SwipeRow<'a> {
    pub fn new(content: impl Into<Text<'a>>, actions: Vec<SwipeAction>) -> Self {
        Self::from_props(content, SwipeRowProps::new(actions))
    }

    pub fn from_props(content: impl Into<Text<'a>>, props: SwipeRowProps) -> Self {
        Self {
            content: content.into(),
            props,
            cell_width: DEFAULT_CELL_WIDTH,
            focused: None,
        }
    }

    pub fn max_swipe(mut self, max_swipe: f64) -> Self {
        self.props = self.props.max_swipe(max_swipe);
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.props = self.props.class_name(class);
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.props = self.props.style(style);
        self
    }

    pub fn inner_class_name(mut self, class: impl Into<String>) -> Self {
        self.props = self.props.inner_class_name(class);
        self
    }

    pub fn inner_style(mut self, style: StyleMap) -> Self {
        self.props = self.props.inner_style(style);
        self
    }

    /// px per terminal column.
    pub fn cell_width(mut self, px: f64) -> Self {
        self.cell_width = px;
        self
    }

    /// Highlight the button at this index as keyboard-focused.
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn props(&self) -> &SwipeRowProps {
        &self.props
    }

    fn content_string(&self) -> String {
        self.content
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Element tree at the state's current offset.
    pub fn view<D: MotionDriver>(&self, state: &SwipeRowState<D>) -> RowView {
        build_view(&self.props, &self.content_string(), state.offset())
    }

    pub fn geometry<D: MotionDriver>(&self, area: Rect, state: &SwipeRowState<D>) -> RowGeometry {
        RowGeometry::compute(area, &self.props.actions, state.offset(), self.cell_width)
    }
}

fn style_color(style: &StyleMap, property: &str, fallback: Rgb) -> Rgb {
    style
        .get(property)
        .and_then(|v| parse_color(v).ok())
        .unwrap_or(fallback)
}

fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(" ");
                cell.set_style(style);
            }
        }
    }
}

fn middle_row(area: Rect, lines: u16) -> Rect {
    let lines = lines.min(area.height);
    Rect {
        y: area.y + (area.height - lines) / 2,
        height: lines,
        ..area
    }
}

impl<'a> StatefulWidget for SwipeRow<'a> {
    type State = SwipeRowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let view = self.view(state);
        let geom = self.geometry(area, state);

        // ── container ────────────────────────────────────────
        let container_bg = style_color(&view.container.style, "background-color", Theme::CONTAINER_BG);
        fill(buf, area, Style::default().bg(Theme::rgb(container_bg)));

        // ── background strip (fades with opacity) ───────────
        for (button, rect) in view.buttons.iter().zip(&geom.buttons) {
            if rect.is_empty() {
                continue;
            }
            let bg = style_color(&button.style, "background-color", container_bg);
            let fg = style_color(&button.style, "color", Rgb::new(255, 255, 255));
            let mut style = Theme::button_style(
                container_bg.mix(bg, view.opacity),
                container_bg.mix(fg, view.opacity),
            );
            if self.focused == Some(button.index) {
                style = style.add_modifier(Theme::focus_modifier());
            }
            fill(buf, *rect, style);
            Paragraph::new(button.text.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .render(middle_row(*rect, 1), buf);
        }

        // ── foreground, rendered unshifted then blitted ──────
        let fg_bg = style_color(&view.foreground.style, "background-color", Theme::FOREGROUND_BG);
        let fg_fg = style_color(&view.foreground.style, "color", Theme::FOREGROUND_FG);
        let fg_style = Theme::foreground_style(fg_bg, fg_fg);

        let mut scratch = Buffer::empty(area);
        fill(&mut scratch, area, fg_style);
        let padded = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };
        let line_count = self.content.lines.len().max(1) as u16;
        Paragraph::new(self.content)
            .style(fg_style)
            .render(middle_row(padded, line_count), &mut scratch);

        let (fg_left, fg_right) = geom.foreground_span();
        for y in area.top()..area.bottom() {
            for x in fg_left..fg_right {
                let src_x = x - geom.shift;
                let (Ok(dst_x), Ok(src_x)) = (u16::try_from(x), u16::try_from(src_x)) else {
                    continue;
                };
                if let (Some(src), Some(dst)) = (scratch.cell((src_x, y)), buf.cell_mut((dst_x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> Vec<SwipeAction> {
        vec![SwipeAction::new("Archive", || {}), SwipeAction::new("Delete", || {})]
    }

    #[test]
    fn buttons_are_right_aligned_in_order() {
        let geom = RowGeometry::compute(Rect::new(0, 0, 40, 3), &two(), 0.0, 8.0);
        assert_eq!(geom.buttons, vec![Rect::new(20, 0, 10, 3), Rect::new(30, 0, 10, 3)]);
        assert_eq!(geom.shift, 0);
    }

    #[test]
    fn closed_row_hits_only_foreground() {
        let geom = RowGeometry::compute(Rect::new(0, 0, 40, 3), &two(), 0.0, 8.0);
        assert_eq!(geom.hit(35, 1), Some(RowHit::Foreground));
        assert_eq!(geom.hit(45, 1), None);
    }

    #[test]
    fn open_row_exposes_buttons() {
        let geom = RowGeometry::compute(Rect::new(0, 0, 40, 3), &two(), -160.0, 8.0);
        assert_eq!(geom.shift, -20);
        assert_eq!(geom.foreground_span(), (0, 20));
        assert_eq!(geom.hit(5, 1), Some(RowHit::Foreground));
        assert_eq!(geom.hit(22, 0), Some(RowHit::Button(0)));
        assert_eq!(geom.hit(39, 2), Some(RowHit::Button(1)));
    }

    #[test]
    fn narrow_row_clips_leading_buttons() {
        let geom = RowGeometry::compute(Rect::new(0, 0, 15, 1), &two(), 0.0, 8.0);
        assert_eq!(geom.buttons[0], Rect::new(0, 0, 5, 1));
        assert_eq!(geom.buttons[1], Rect::new(5, 0, 10, 1));
    }
}
