//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* row model and turns it into cells on the
//! terminal.  No interaction decisions are made here.

pub mod layout;
pub mod swipe_row;
pub mod theme;
