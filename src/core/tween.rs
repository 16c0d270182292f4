//=========================================================================
// Tween Controller
//=========================================================================
//
// Finite-duration, step-based interpolator.
//
// Architecture:
//   activate() → Idle ─(first update)→ Running ─(duration reached)→ Idle
//                          │                │
//                      on_start()     on_step(delta) × steps
//                                           │
//                                     on_complete()
//
// Every step applies the same fixed delta (total / steps), so the driven
// value lands on its target after exactly `steps` steps no matter how the
// frame times were distributed.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== TweenHooks ==========================================================

/// Callbacks fired by a [`Tween`] against the value it drives.
pub trait TweenHooks<T: ?Sized> {
    /// Fired once when the tween leaves `Idle`.
    fn on_start(&mut self, _target: &mut T) {}

    /// Fired once per step with the fixed per-step delta.
    fn on_step(&mut self, target: &mut T, delta: f32);

    /// Fired once when the full duration has elapsed.
    fn on_complete(&mut self, _target: &mut T) {}
}

//=== Slide ===============================================================

/// Hooks that move an `f32` from one resting position to another.
///
/// Start and completion snap to the exact resting positions so rounding
/// in the per-step delta never leaves the value in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub from: f32,
    pub to: f32,
}

impl TweenHooks<f32> for Slide {
    fn on_start(&mut self, target: &mut f32) {
        *target = self.from;
    }

    fn on_step(&mut self, target: &mut f32, delta: f32) {
        *target += delta;
    }

    fn on_complete(&mut self, target: &mut f32) {
        *target = self.to;
    }
}

//=== TweenState ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    Idle,
    Running,
}

//=== TweenTick ===========================================================

/// What a single [`Tween::update`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TweenTick {
    pub started: bool,
    pub steps: u32,
    pub completed: bool,
}

//=== Tween ===============================================================

/// Step-based interpolator with an idempotent activation flag.
pub struct Tween<H> {
    duration: Duration,
    steps: u32,
    step_delta: f32,
    step_time: Duration,
    hooks: H,

    //--- Activation State -------------------------------------------------
    on: bool,
    started: bool,
    elapsed: Duration,
    steps_applied: u32,
}

impl<H> Tween<H> {
    //--- Construction -----------------------------------------------------

    /// Creates an idle tween moving its target by `total_delta` over
    /// `duration`, split into `steps` equal steps.
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0` or `duration` is zero.
    pub fn new(duration: Duration, steps: u32, total_delta: f32, hooks: H) -> Self {
        assert!(steps > 0, "Tween needs at least one step");
        assert!(!duration.is_zero(), "Tween duration must be positive");

        Self {
            duration,
            steps,
            step_delta: total_delta / steps as f32,
            step_time: duration / steps,
            hooks,
            on: false,
            started: false,
            elapsed: Duration::ZERO,
            steps_applied: 0,
        }
    }

    //--- Activation -------------------------------------------------------

    /// Sets the activation flag.
    ///
    /// Returns `false` and does nothing if the tween is already active;
    /// the running animation is never restarted.
    ///
    /// [`state`](Self::state) reports `Running` from here on, but
    /// `on_start` is deferred to the next [`update`](Self::update).
    pub fn activate(&mut self) -> bool {
        if self.on {
            return false;
        }
        self.on = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.on
    }

    pub fn state(&self) -> TweenState {
        if self.on {
            TweenState::Running
        } else {
            TweenState::Idle
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn step_delta(&self) -> f32 {
        self.step_delta
    }

    pub fn steps_applied(&self) -> u32 {
        self.steps_applied
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    //--- Update -----------------------------------------------------------

    /// Advances the tween by `dt`. No-op while idle.
    pub fn update<T: ?Sized>(&mut self, dt: Duration, target: &mut T) -> TweenTick
    where
        H: TweenHooks<T>,
    {
        let mut tick = TweenTick::default();
        if !self.on {
            return tick;
        }

        if !self.started {
            self.started = true;
            self.hooks.on_start(target);
            tick.started = true;
        }

        self.elapsed += dt;

        let due = self.steps_due();
        while self.steps_applied < due {
            self.hooks.on_step(target, self.step_delta);
            self.steps_applied += 1;
            tick.steps += 1;
        }

        if self.elapsed >= self.duration {
            self.hooks.on_complete(target);
            self.reset();
            tick.completed = true;
        }

        tick
    }

    //--- Internal Helpers -------------------------------------------------

    fn steps_due(&self) -> u32 {
        if self.elapsed >= self.duration {
            return self.steps;
        }
        let step_nanos = self.step_time.as_nanos().max(1);
        let due = self.elapsed.as_nanos() / step_nanos;
        due.min(self.steps as u128) as u32
    }

    fn reset(&mut self) {
        self.on = false;
        self.started = false;
        self.elapsed = Duration::ZERO;
        self.steps_applied = 0;
    }
}

impl Tween<Slide> {
    /// Tween sliding an `f32` from `from` to `to`.
    pub fn slide(duration: Duration, steps: u32, from: f32, to: f32) -> Self {
        Self::new(duration, steps, to - from, Slide { from, to })
    }
}

impl<H: std::fmt::Debug> std::fmt::Debug for Tween<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("state", &self.state())
            .field("elapsed", &self.elapsed)
            .field("steps_applied", &self.steps_applied)
            .field("steps", &self.steps)
            .field("hooks", &self.hooks)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
