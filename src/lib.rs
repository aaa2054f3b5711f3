//! A swipeable terminal list row that reveals action buttons behind its
//! content.
//!
//! The gesture rules live in [`core`] and never touch the terminal; [`ui`]
//! draws a row with Ratatui.  Drag the foreground left past half the action
//! strip and it snaps open, otherwise it snaps closed.

pub mod config;
pub mod core;
pub mod error;
pub mod ui;

pub use crate::core::action::{Label, SwipeAction};
pub use crate::core::motion::{DragConstraints, MotionDriver, MotionOffset, SpringSpec};
pub use crate::core::row::{SwipeRowProps, SwipeRowState};
pub use crate::core::style::StyleMap;
pub use crate::core::swipe::SwipePhase;
pub use crate::core::view::RowView;
pub use crate::error::SwipeError;
pub use crate::ui::swipe_row::{RowGeometry, RowHit, SwipeRow};
