//! Prize wheel entry point
//!
//! Native builds run a terminal demo spin in real time; the web build
//! exports a `WheelHandle` the page drives from `requestAnimationFrame`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_wheel {
    use wasm_bindgen::prelude::*;

    use prize_wheel::ParticipantId;
    use prize_wheel::audio::WebAudioSink;
    use prize_wheel::spin::{SpinEvent, WheelController};

    /// Wheel engine handle exported to the page. The page owns the
    /// `requestAnimationFrame` loop and feeds its timestamps into `frame`;
    /// all rendering happens on the JS side from the JSON snapshots.
    #[wasm_bindgen]
    pub struct WheelHandle {
        inner: WheelController,
    }

    #[wasm_bindgen]
    impl WheelHandle {
        /// Build the controller with browser audio and whatever settings and
        /// winner history LocalStorage still holds
        #[wasm_bindgen(constructor)]
        pub fn new() -> WheelHandle {
            let seed = js_sys::Date::now() as u64;
            WheelHandle {
                inner: WheelController::new_persisted(seed, Box::new(WebAudioSink::new())),
            }
        }

        pub fn add_participant(&mut self, name: &str) -> u64 {
            self.inner.add_participant(name).0
        }

        /// Bulk import, one name per line; returns how many were added
        pub fn add_bulk(&mut self, text: &str) -> usize {
            self.inner.add_bulk(text)
        }

        pub fn remove_participant(&mut self, id: u64) -> bool {
            self.inner.remove_participant(ParticipantId(id))
        }

        pub fn shuffle(&mut self) {
            self.inner.shuffle_roster();
        }

        pub fn reset(&mut self) {
            self.inner.reset_roster();
        }

        pub fn clear_history(&mut self) {
            self.inner.clear_history();
        }

        pub fn set_spin_duration(&mut self, secs: f64) -> bool {
            self.inner.set_spin_duration(secs)
        }

        pub fn set_sound_enabled(&mut self, enabled: bool) {
            self.inner.set_sound_enabled(enabled);
        }

        pub fn spin(&mut self) -> bool {
            self.inner.spin()
        }

        /// Advance to the frame timestamp; returns "tick", "win", or nothing
        pub fn frame(&mut self, now_ms: f64) -> Option<String> {
            self.inner.frame(now_ms).map(|event| match event {
                SpinEvent::Tick => "tick".to_string(),
                SpinEvent::Win => "win".to_string(),
            })
        }

        pub fn cancel(&mut self) {
            self.inner.cancel();
        }

        pub fn rotation(&self) -> f64 {
            self.inner.state().rotation
        }

        pub fn is_spinning(&self) -> bool {
            self.inner.state().is_spinning
        }

        pub fn winner_name(&self) -> Option<String> {
            self.inner.state().winner.as_ref().map(|w| w.name.clone())
        }

        /// Live roster as JSON for the rendering layer
        pub fn participants_json(&self) -> String {
            serde_json::to_string(self.inner.participants()).unwrap_or_default()
        }

        /// Winner history as JSON, newest first
        pub fn winners_json(&self) -> String {
            serde_json::to_string(self.inner.winners()).unwrap_or_default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant};

    use prize_wheel::spin::{SpinEvent, WheelController};

    env_logger::init();

    let seed = prize_wheel::platform::unix_time_ms() as u64;
    let mut wheel = WheelController::new(seed);
    for name in ["Ada", "Grace", "Edsger", "Barbara", "Donald", "Radia"] {
        wheel.add_participant(name);
    }
    wheel.set_spin_duration(3.0);

    log::info!(
        "Spinning a {}-slice wheel (seed {})",
        wheel.participants().len(),
        seed
    );

    wheel.spin();
    let start = Instant::now();
    let mut ticks = 0u32;
    while wheel.state().is_spinning {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        match wheel.frame(now_ms) {
            Some(SpinEvent::Tick) => ticks += 1,
            Some(SpinEvent::Win) => break,
            None => {}
        }
        std::thread::sleep(Duration::from_millis(16));
    }

    if let Some(winner) = &wheel.state().winner {
        println!(
            "Winner after {} ticks: {} ({}), wheel at {:.1} deg",
            ticks,
            winner.name,
            winner.color,
            wheel.state().rotation
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Prize wheel engine loaded");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
