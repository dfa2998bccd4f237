//! Frame timing

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Sleeps away whatever is left of a fixed frame budget (native loop)
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    start: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            start: Instant::now(),
        }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.start = Instant::now();
    }

    /// Time left in the current frame
    pub fn remaining(&self) -> Duration {
        self.frame.saturating_sub(self.start.elapsed())
    }

    /// Block until the frame budget is used up
    pub fn wait(&self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Fixed-timestep accumulator for callbacks driven by the display refresh
/// (browser `requestAnimationFrame`).
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FixedStep {
    /// Feed a timestamp in milliseconds; returns how many simulation ticks
    /// to run. Long gaps (tab in background) are clamped.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        self.accumulator += dt.clamp(0.0, 0.25);

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog instead of catching up over several frames
            self.accumulator = 0.0;
        }
        steps
    }
}

/// Seed for a run when none is configured
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    (js_sys::Date::now() * 1000.0) as u64 ^ (js_sys::Math::random() * u32::MAX as f64) as u64
}
