//! Platform abstraction layer
//!
//! Wall-clock time differs between the browser and native builds; the frame
//! clock itself is host-provided and never read here.

/// Unix time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn unix_time_ms() -> f64 {
    js_sys::Date::now()
}

/// Unix time in milliseconds
#[cfg(not(target_arch = "wasm32"))]
pub fn unix_time_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_time_is_past_2020() {
        assert!(unix_time_ms() > 1_577_836_800_000.0);
    }
}
