//! Prize Wheel - a segmented spin-the-wheel engine
//!
//! Core modules:
//! - `spin`: Deterministic spin engine (resolver, animator, session controller)
//! - `roster`: Participant list and fair shuffling
//! - `history`: Winner log
//! - `audio`: Tick/win sound sinks
//! - `settings`: Operator preferences

pub mod audio;
pub mod history;
pub mod platform;
pub mod roster;
pub mod settings;
pub mod spin;

pub use history::{WinnerLog, WinnerRecord};
pub use roster::{Participant, ParticipantId, Roster};
pub use settings::Settings;
pub use spin::{SpinEvent, WheelController, WheelState};

/// Engine constants
pub mod consts {
    /// Degrees in one full revolution
    pub const FULL_TURN: f64 = 360.0;

    /// Minimum participants required for a meaningful spin
    pub const MIN_PARTICIPANTS: usize = 2;

    /// Guaranteed full revolutions per spin, before the per-second bonus
    pub const BASE_MIN_SPINS: f64 = 5.0;
    /// Extra guaranteed revolutions per second of spin duration
    pub const SPINS_PER_SECOND: f64 = 2.0;

    /// Spin duration bounds (seconds, operator-adjustable while idle)
    pub const MIN_SPIN_DURATION: f64 = 1.0;
    pub const MAX_SPIN_DURATION: f64 = 20.0;
    pub const DEFAULT_SPIN_DURATION: f64 = 8.0;
}

/// Normalize a rotation in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(rotation: f64) -> f64 {
    ((rotation % consts::FULL_TURN) + consts::FULL_TURN) % consts::FULL_TURN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
    }
}
