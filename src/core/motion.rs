//! Drag-and-spring motion primitive behind the foreground offset.
//!
//! The row logic only talks to [`MotionDriver`]; [`MotionOffset`] is the
//! default driver.  It applies elastic drag constraints and settles with a
//! damped spring solved in closed form, so ticks of any size land on the
//! same curve.

use std::time::Duration;

use super::swipe::apply_elastic;

/// Bleed applied past a drag bound unless configured otherwise.
pub const DEFAULT_DRAG_ELASTIC: f64 = 0.1;

/// Settle animation duration.
pub const SETTLE_DURATION: Duration = Duration::from_millis(300);

/// Settle animation bounce (0 = no overshoot).
pub const SETTLE_BOUNCE: f64 = 0.0;

/// Envelope fraction at which a duration-based spring counts as finished.
const DURATION_EPSILON: f64 = 0.001;

// ───────────────────────────────────────── spring ────────────

/// Spring configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = bouncy.
    pub damping_ratio: f64,
    /// Natural angular frequency (rad/s).  Stiffness for unit mass is its square.
    pub angular_frequency: f64,
    /// Displacement (px) below which the spring may stop.
    pub rest_delta: f64,
    /// Speed (px/s) below which the spring may stop.
    pub rest_speed: f64,
}

impl SpringSpec {
    /// Spring that visually completes in `duration` with the given bounce.
    ///
    /// The damping ratio is `1 - bounce`; the frequency is picked so the
    /// response envelope decays to [`DURATION_EPSILON`] at `duration`.
    pub fn from_duration(duration: Duration, bounce: f64) -> Self {
        let secs = duration.as_secs_f64().max(0.01);
        let damping_ratio = (1.0 - bounce).clamp(0.05, 1.0);
        let angular_frequency = if damping_ratio >= 1.0 {
            critical_decay_time(DURATION_EPSILON) / secs
        } else {
            (1.0 / DURATION_EPSILON).ln() / (damping_ratio * secs)
        };
        Self {
            damping_ratio,
            angular_frequency,
            rest_delta: 0.5,
            rest_speed: 2.0,
        }
    }

    /// The spring used when a released row snaps open or closed.
    pub fn settle() -> Self {
        Self::from_duration(SETTLE_DURATION, SETTLE_BOUNCE)
    }

    /// Displacement and velocity `t` seconds after release from
    /// displacement `x0` with velocity `v0`.
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let w = self.angular_frequency;
        let z = self.damping_ratio;
        if z >= 1.0 {
            let b = v0 + w * x0;
            let e = (-w * t).exp();
            ((x0 + b * t) * e, (v0 - w * b * t) * e)
        } else {
            let wd = w * (1.0 - z * z).sqrt();
            let c = (v0 + z * w * x0) / wd;
            let e = (-z * w * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = e * (x0 * cos + c * sin);
            let v = e * (v0 * cos - (z * w * c + x0 * wd) * sin);
            (x, v)
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::settle()
    }
}

/// Solve `(1 + x)·e^(−x) = eps` for `x > 0` (Newton's method).
fn critical_decay_time(eps: f64) -> f64 {
    let mut x: f64 = 5.0;
    for _ in 0..32 {
        let f = (1.0 + x) * (-x).exp() - eps;
        let df = -x * (-x).exp();
        if df == 0.0 {
            break;
        }
        let next = (x - f / df).max(0.1);
        if (next - x).abs() < 1e-9 {
            return next;
        }
        x = next;
    }
    x
}

// ───────────────────────────────────────── driver ────────────

/// Horizontal drag bounds with elastic bleed past them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConstraints {
    pub min: f64,
    pub max: f64,
    pub elastic: f64,
}

impl DragConstraints {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            elastic: DEFAULT_DRAG_ELASTIC,
        }
    }

    pub fn elastic(mut self, elastic: f64) -> Self {
        self.elastic = elastic.clamp(0.0, 1.0);
        self
    }
}

impl Default for DragConstraints {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// The capability a swipe row needs from its gesture / animation backend.
pub trait MotionDriver {
    /// Current foreground offset.
    fn offset(&self) -> f64;

    fn set_constraints(&mut self, constraints: DragConstraints);

    /// Pointer went down.  Any running animation stops where it is.
    fn begin_drag(&mut self);

    /// Pointer moved by `delta` px since the last call.
    fn drag_by(&mut self, delta: f64);

    /// Pointer released.  Returns the offset at release.
    fn end_drag(&mut self) -> f64;

    fn animate_to(&mut self, target: f64, spring: SpringSpec);

    /// Advance animation.  Returns `true` while still moving.
    fn tick(&mut self, dt: Duration) -> bool;

    fn is_dragging(&self) -> bool;

    fn is_animating(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct SpringRun {
    target: f64,
    x0: f64,
    v0: f64,
    elapsed: f64,
    spec: SpringSpec,
}

/// Default [`MotionDriver`]: elastic drag plus closed-form spring settle.
#[derive(Debug, Clone, Default)]
pub struct MotionOffset {
    offset: f64,
    /// Unconstrained pointer position while dragging.
    raw: f64,
    dragging: bool,
    constraints: DragConstraints,
    run: Option<SpringRun>,
}

impl MotionOffset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target of the running animation, if any.
    pub fn animation_target(&self) -> Option<f64> {
        self.run.map(|r| r.target)
    }
}

impl MotionDriver for MotionOffset {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_constraints(&mut self, constraints: DragConstraints) {
        self.constraints = constraints;
    }

    fn begin_drag(&mut self) {
        self.run = None;
        self.raw = self.offset;
        self.dragging = true;
    }

    fn drag_by(&mut self, delta: f64) {
        if !self.dragging {
            return;
        }
        self.raw += delta;
        let c = self.constraints;
        self.offset = apply_elastic(self.raw, c.min, c.max, c.elastic);
    }

    fn end_drag(&mut self) -> f64 {
        self.dragging = false;
        self.offset
    }

    fn animate_to(&mut self, target: f64, spring: SpringSpec) {
        self.run = Some(SpringRun {
            target,
            x0: self.offset - target,
            v0: 0.0,
            elapsed: 0.0,
            spec: spring,
        });
    }

    fn tick(&mut self, dt: Duration) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        run.elapsed += dt.as_secs_f64();
        let (x, v) = run.spec.solve(run.x0, run.v0, run.elapsed);
        if x.abs() < run.spec.rest_delta && v.abs() < run.spec.rest_speed {
            self.offset = run.target;
            self.run = None;
            false
        } else {
            self.offset = run.target + x;
            true
        }
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_animating(&self) -> bool {
        self.run.is_some()
    }
}
