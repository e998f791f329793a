//! Selection resolver: rotation angle to active slice
//!
//! The pointer is fixed at 12 o'clock while the wheel rotates clockwise
//! underneath it, so the slice under the pointer sits at the inverse of the
//! wheel's rotation. Each of the N participants owns an equal slice of
//! 360/N degrees, assigned in list order starting at angle 0.

use crate::consts::FULL_TURN;
use crate::normalize_degrees;
use crate::roster::Participant;

/// Resolve which participant sits under the pointer for a given rotation.
///
/// Pure and idempotent: called every animation frame for tick detection and
/// once at settle to declare the winner. Returns `None` for an empty list;
/// callers must not invoke it then, and the sentinel stands in for raising
/// on the precondition violation.
pub fn resolve(rotation: f64, participants: &[Participant]) -> Option<(usize, &Participant)> {
    if participants.is_empty() {
        return None;
    }
    let index = resolve_index(rotation, participants.len());
    Some((index, &participants[index]))
}

/// Slice index under the pointer for a wheel of `count` equal slices.
///
/// `rotation` may be any real number of degrees, negative or far beyond 360.
pub fn resolve_index(rotation: f64, count: usize) -> usize {
    debug_assert!(count > 0);
    let slice_width = FULL_TURN / count as f64;
    let normalized = normalize_degrees(rotation);
    let active_angle = (FULL_TURN - normalized) % FULL_TURN;
    // Floating error can push floor(active / width) to `count` when the
    // active angle lands on 360 exactly; clamp to the last valid slice.
    ((active_angle / slice_width) as usize).min(count - 1)
}
