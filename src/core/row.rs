//! Swipe row configuration and the per-row interaction state machine.
//!
//! Props are rebuilt freely each frame; [`SwipeRowState`] lives as long as
//! the row is on screen and is the only thing that remembers the offset.

use std::time::Duration;

use super::action::SwipeAction;
use super::motion::{DragConstraints, MotionDriver, MotionOffset, SpringSpec, DEFAULT_DRAG_ELASTIC};
use super::style::StyleMap;
use super::swipe::{settle_target, swipe_extent, SwipePhase};

// ───────────────────────────────────────── props ─────────────

/// Everything a caller configures on a row, minus its content.
#[derive(Debug, Clone)]
pub struct SwipeRowProps {
    pub actions: Vec<SwipeAction>,
    pub max_swipe: Option<f64>,
    pub class_name: Option<String>,
    pub style: Option<StyleMap>,
    pub inner_class_name: Option<String>,
    pub inner_style: Option<StyleMap>,
    pub drag_elastic: f64,
}

impl Default for SwipeRowProps {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SwipeRowProps {
    pub fn new(actions: Vec<SwipeAction>) -> Self {
        Self {
            actions,
            max_swipe: None,
            class_name: None,
            style: None,
            inner_class_name: None,
            inner_style: None,
            drag_elastic: DEFAULT_DRAG_ELASTIC,
        }
    }

    pub fn max_swipe(mut self, max_swipe: f64) -> Self {
        self.max_swipe = Some(max_swipe);
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    pub fn inner_class_name(mut self, class: impl Into<String>) -> Self {
        self.inner_class_name = Some(class.into());
        self
    }

    pub fn inner_style(mut self, style: StyleMap) -> Self {
        self.inner_style = Some(style);
        self
    }

    pub fn drag_elastic(mut self, elastic: f64) -> Self {
        self.drag_elastic = elastic;
        self
    }

    /// Fully-open offset for this configuration.
    pub fn extent(&self) -> f64 {
        swipe_extent(&self.actions, self.max_swipe)
    }

    pub fn constraints(&self) -> DragConstraints {
        DragConstraints::new(self.extent(), 0.0).elastic(self.drag_elastic)
    }
}

// ───────────────────────────────────────── state ─────────────

/// Interaction state for one row: offset, phase, and the pointer being tracked.
#[derive(Debug, Clone)]
pub struct SwipeRowState<D: MotionDriver = MotionOffset> {
    driver: D,
    phase: SwipePhase,
    /// Extent captured when the current drag started.
    extent: f64,
    /// Last pointer x (px) seen during a drag.
    pointer: Option<f64>,
}

impl Default for SwipeRowState<MotionOffset> {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeRowState<MotionOffset> {
    /// A closed row at offset 0.
    pub fn new() -> Self {
        Self::with_driver(MotionOffset::new())
    }
}

impl<D: MotionDriver> SwipeRowState<D> {
    pub fn with_driver(driver: D) -> Self {
        Self {
            driver,
            phase: SwipePhase::Closed,
            extent: 0.0,
            pointer: None,
        }
    }

    pub fn offset(&self) -> f64 {
        self.driver.offset()
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Pointer pressed on the foreground at `x` px.
    pub fn drag_start(&mut self, props: &SwipeRowProps, x: f64) {
        self.extent = props.extent();
        self.driver.set_constraints(props.constraints());
        self.driver.begin_drag();
        self.pointer = Some(x);
        self.phase = SwipePhase::Dragging;
        tracing::debug!(offset = self.offset(), extent = self.extent, "swipe drag start");
    }

    /// Pointer moved to `x` px.  Ignored when no drag is active.
    pub fn drag_to(&mut self, x: f64) {
        let Some(last) = self.pointer else {
            return;
        };
        self.driver.drag_by(x - last);
        self.pointer = Some(x);
    }

    /// Pointer released: snap open past half the extent, closed otherwise.
    pub fn drag_end(&mut self) {
        if self.pointer.take().is_none() {
            return;
        }
        let released = self.driver.end_drag();
        let target = settle_target(released, self.extent);
        let open = target != 0.0;
        tracing::debug!(released, extent = self.extent, target, open, "swipe drag end");
        self.driver.animate_to(target, SpringSpec::settle());
        self.phase = SwipePhase::Settling { open };
    }

    /// Advance the settle animation.  Returns `true` while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let moving = self.driver.tick(dt);
        if let SwipePhase::Settling { open } = self.phase {
            if !moving {
                self.phase = if open { SwipePhase::Open } else { SwipePhase::Closed };
            }
        }
        moving
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Activate the action at `index`.  The row stays where it is.
    pub fn click(&self, props: &SwipeRowProps, index: usize) -> bool {
        match props.actions.get(index) {
            Some(action) => {
                tracing::debug!(index, name = %action.accessible_name(index), "swipe action clicked");
                action.invoke();
                true
            }
            None => false,
        }
    }
}
