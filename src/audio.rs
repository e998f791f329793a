//! Tick and win sounds
//!
//! Procedurally generated with Web Audio on the web build - no sample files
//! needed. Native builds and tests use the silent sink.

/// Sound cues emitted by the spin engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinSound {
    /// A slice boundary crossed the pointer
    Tick,
    /// The spin settled on a winner
    Win,
}

/// Fire-and-forget sound output, injected into the session controller
pub trait SoundSink {
    /// Play a cue. Implementations must not block the frame callback.
    fn play(&self, sound: SpinSound);

    /// Resume a suspended backend (browsers require a user gesture before
    /// audio may start)
    fn resume(&self) {}
}

/// Silent sink
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&self, _sound: SpinSound) {}
}

#[cfg(target_arch = "wasm32")]
pub use web_audio::WebAudioSink;

#[cfg(target_arch = "wasm32")]
mod web_audio {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundSink, SpinSound};

    /// Win jingle: C5, E5, G5, C6
    const WIN_NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.5];

    /// Web Audio sink
    pub struct WebAudioSink {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for WebAudioSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudioSink {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 1.0 }
        }

        /// Set output volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        /// Create an oscillator with a gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Tick - short rising click as a boundary passes the pointer
        fn play_tick(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 800.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();

            osc.frequency().set_value_at_time(800.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(1200.0, t + 0.02)
                .ok();

            gain.gain().set_value_at_time(vol * 0.05, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + 0.05)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.05).ok();
        }

        /// Win - staggered triangle-wave arpeggio
        fn play_win(&self, ctx: &AudioContext, vol: f32) {
            for (i, freq) in WIN_NOTES.iter().enumerate() {
                let delay = i as f64 * 0.1;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(0.0, t).ok();
                    gain.gain()
                        .linear_ramp_to_value_at_time(vol * 0.1, t + 0.05)
                        .ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.001, t + 1.0)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 1.0).ok();
                }
            }
        }
    }

    impl SoundSink for WebAudioSink {
        fn play(&self, sound: SpinSound) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume if suspended (browsers require a user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match sound {
                SpinSound::Tick => self.play_tick(ctx, self.volume),
                SpinSound::Win => self.play_win(ctx, self.volume),
            }
        }

        fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_swallows_everything() {
        let sink = NullSink;
        sink.play(SpinSound::Tick);
        sink.play(SpinSound::Win);
        sink.resume();
    }
}
