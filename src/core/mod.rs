//! Core swipe logic – action descriptors, extent / threshold maths, style
//! merging and the motion primitive that drives the foreground offset.
//!
//! Nothing in this module depends on any TUI or rendering crate, so every
//! rule here can be exercised without a terminal.

pub mod action;
pub mod color;
pub mod motion;
pub mod row;
pub mod style;
pub mod swipe;
pub mod view;
