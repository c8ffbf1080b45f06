//! Hover/activation transition state
//!
//! A [`Transition`] is a plain value: the host's tick source calls
//! [`Transition::advance`] with elapsed milliseconds and samples
//! [`Transition::value`] when painting. There is no hidden timer and no
//! callback-driven mutation, so the state machine is testable on its own.
//!
//! Progress always moves toward a bound of 0 or 1 and clamps there;
//! reversing mid-flight flips the direction in place and continues from
//! the current progress, which is what keeps a quick hover-out from
//! visually jumping.

use crate::easing::Easing;

/// Direction of travel for the transition progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward 1.0 (entering the highlighted condition)
    Forward,
    /// Toward 0.0 (leaving it)
    Backward,
}

impl Direction {
    fn target(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => 0.0,
        }
    }
}

/// Outcome of a transition request, mostly useful for deciding whether a
/// repaint needs to be scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Nothing to do (already at or travelling to the target)
    Unchanged,
    /// Started running from rest
    Started,
    /// Was running the other way; direction flipped in place
    Redirected,
    /// Animations disabled; progress jumped straight to the target
    Snapped,
}

/// Per-entity interpolation state in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    progress: f32,
    direction: Direction,
    running: bool,
    duration_ms: u32,
    easing: Easing,
}

impl Transition {
    /// A transition at rest at 0, ready to run forward
    pub fn new(duration_ms: u32) -> Self {
        Self::resting(false, duration_ms)
    }

    /// A transition at rest at the bound matching `highlighted`
    pub fn resting(highlighted: bool, duration_ms: u32) -> Self {
        let direction = if highlighted {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Self {
            progress: direction.target(),
            direction,
            running: false,
            duration_ms,
            easing: Easing::EaseInOutQuad,
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Update the duration (on reconfigure); an in-flight run keeps its
    /// current progress and finishes at the new rate
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Raw progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased progress, used as the color mix factor
    pub fn value(&self) -> f32 {
        self.easing.apply(self.progress)
    }

    /// Request travel toward the bound matching `highlighted`.
    ///
    /// With animations disabled this snaps to the target immediately.
    /// Requesting the current direction while running is a no-op;
    /// requesting the opposite direction redirects in place.
    pub fn trigger(&mut self, highlighted: bool, animations_enabled: bool) -> Trigger {
        let direction = if highlighted {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let target = direction.target();

        if !animations_enabled || self.duration_ms == 0 {
            self.running = false;
            self.direction = direction;
            if self.progress == target {
                return Trigger::Unchanged;
            }
            self.progress = target;
            return Trigger::Snapped;
        }

        if self.running {
            if self.direction == direction {
                return Trigger::Unchanged;
            }
            tracing::trace!(?direction, progress = self.progress, "transition redirected");
            self.direction = direction;
            return Trigger::Redirected;
        }

        self.direction = direction;
        if self.progress == target {
            return Trigger::Unchanged;
        }
        tracing::trace!(?direction, progress = self.progress, "transition started");
        self.running = true;
        Trigger::Started
    }

    /// Advance by elapsed wall-clock time. Returns true if the sampled
    /// value changed (i.e. a repaint is warranted).
    pub fn advance(&mut self, delta_ms: f32) -> bool {
        if !self.running || delta_ms <= 0.0 {
            return false;
        }

        let step = delta_ms / self.duration_ms as f32;
        match self.direction {
            Direction::Forward => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress >= 1.0 {
                    self.running = false;
                }
            }
            Direction::Backward => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress <= 0.0 {
                    self.running = false;
                }
            }
        }
        true
    }
}
