//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one swipe row, in terminal rows.
pub const ROW_HEIGHT: u16 = 3;

/// Playground screen: a bordered list of swipe rows over a status bar.
pub struct PlaygroundLayout {
    pub list_area: Rect,
    /// One rect per swipe row, top to bottom.  Rows that do not fit are dropped.
    pub rows: Vec<Rect>,
    pub status_area: Rect,
}

impl PlaygroundLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect, row_count: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // row list (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let list_area = chunks[0];
        // Inside the border, with a blank line between rows.
        let inner = Rect {
            x: list_area.x.saturating_add(2),
            y: list_area.y.saturating_add(1),
            width: list_area.width.saturating_sub(4),
            height: list_area.height.saturating_sub(2),
        };

        let mut rows = Vec::with_capacity(row_count);
        let mut y = inner.y.saturating_add(1);
        for _ in 0..row_count {
            if y.saturating_add(ROW_HEIGHT) > inner.bottom() {
                break;
            }
            rows.push(Rect::new(inner.x, y, inner.width, ROW_HEIGHT));
            y = y.saturating_add(ROW_HEIGHT + 1);
        }

        Self {
            list_area,
            rows,
            status_area: chunks[1],
        }
    }

    /// Index of the row containing the terminal cell `(col, row)`.
    pub fn row_at(&self, col: u16, row: u16) -> Option<usize> {
        self.rows.iter().position(|r| point_in_rect(*r, col, row))
    }
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stack_with_gaps_inside_border() {
        let layout = PlaygroundLayout::from_area(Rect::new(0, 0, 60, 20), 2);
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.rows[0], Rect::new(2, 2, 56, 3));
        assert_eq!(layout.rows[1], Rect::new(2, 6, 56, 3));
        assert_eq!(layout.status_area, Rect::new(0, 19, 60, 1));
        assert_eq!(layout.row_at(10, 7), Some(1));
        assert_eq!(layout.row_at(10, 5), None);
    }

    #[test]
    fn rows_that_do_not_fit_are_dropped() {
        let layout = PlaygroundLayout::from_area(Rect::new(0, 0, 40, 7), 3);
        assert_eq!(layout.rows.len(), 1);
    }
}
