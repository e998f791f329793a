//! Deterministic spin engine
//!
//! All spin logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Advanced synchronously from the host's frame callback
//! - Slice resolution is a pure function of (rotation, ordered list)
//! - No rendering or platform dependencies beyond the injected sound sink

pub mod animate;
pub mod resolve;
pub mod session;

pub use animate::{Frame, SpinAnimation, ease_out_expo};
pub use resolve::{resolve, resolve_index};
pub use session::{SpinEvent, WheelController, WheelState};
