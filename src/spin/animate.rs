//! Spin animation: eased rotation from a settled angle to a target angle
//!
//! The animation is a passive state machine advanced by the host's per-frame
//! callback. Time is an arbitrary-epoch millisecond clock (the browser's
//! `performance.now()` or a simulated clock in tests); the first frame
//! latches the start timestamp. The participant list is frozen at
//! construction, so live roster edits never disturb an in-flight spin.

use serde::{Deserialize, Serialize};

use super::resolve::{resolve, resolve_index};
use crate::normalize_degrees;
use crate::roster::Participant;

/// Exponential ease-out: fast start, asymptotic approach to 1.
///
/// `ease(0) = 0` exactly; `ease(1)` is within 1/1024 of 1. The final frame
/// clamps to the target instead of evaluating the curve, so the residual
/// never shows up in the settled rotation.
#[inline]
pub fn ease_out_expo(t: f64) -> f64 {
    1.0 - 2.0f64.powf(-10.0 * t)
}

/// Outcome of advancing the animation by one frame
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Still animating. `tick` carries the newly active slice index when the
    /// pointer crossed a boundary this frame.
    Running { rotation: f64, tick: Option<usize> },
    /// Animation complete. `rotation` is the target normalized to [0, 360);
    /// `winner` is `None` only if the frozen list was empty (caller bug).
    Settled {
        rotation: f64,
        winner: Option<(usize, Participant)>,
    },
}

/// One in-flight spin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinAnimation {
    start_rotation: f64,
    target_rotation: f64,
    duration_secs: f64,
    /// Participant list captured at spin start
    snapshot: Vec<Participant>,
    /// Latched by the first `frame` call
    start_time_ms: Option<f64>,
    /// Active slice as of the previous frame, for edge-triggered ticks
    last_index: usize,
}

impl SpinAnimation {
    pub fn new(
        start_rotation: f64,
        target_rotation: f64,
        duration_secs: f64,
        snapshot: Vec<Participant>,
    ) -> Self {
        debug_assert!(!snapshot.is_empty());
        debug_assert!(duration_secs > 0.0);
        // Baseline the tick detector on the start rotation so the first
        // frame only ticks if the index actually changed.
        let last_index = if snapshot.is_empty() {
            0
        } else {
            resolve_index(start_rotation, snapshot.len())
        };
        Self {
            start_rotation,
            target_rotation,
            duration_secs,
            snapshot,
            start_time_ms: None,
            last_index,
        }
    }

    /// The frozen participant list this spin resolves against
    pub fn participants(&self) -> &[Participant] {
        &self.snapshot
    }

    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    /// Advance to `now_ms`, computing this frame's rotation and any
    /// boundary-crossing tick. Slice detection runs on the raw unclamped
    /// rotation; mod-equivalence makes it interchangeable with the displayed
    /// angle.
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start) / 1000.0;

        if elapsed < self.duration_secs {
            let t = elapsed / self.duration_secs;
            let eased = ease_out_expo(t);
            let rotation = self.start_rotation + eased * (self.target_rotation - self.start_rotation);

            let tick = resolve(rotation, &self.snapshot).and_then(|(index, _)| {
                if index != self.last_index {
                    self.last_index = index;
                    Some(index)
                } else {
                    None
                }
            });

            Frame::Running { rotation, tick }
        } else {
            // Clamp to the exact target, not the eased approximation
            let winner = resolve(self.target_rotation, &self.snapshot)
                .map(|(index, participant)| (index, participant.clone()));
            Frame::Settled {
                rotation: normalize_degrees(self.target_rotation),
                winner,
            }
        }
    }
}
