//! Render cadence.
//!
//! The scroll renderer runs off display-refresh callbacks but renders at the
//! rate the audio produces analysis windows: `sample_rate / window_size`
//! frames per second. [`FrameClock`] gates each callback against that target
//! interval. When a pass fires, the last-frame timestamp advances by whole
//! intervals and keeps the leftover remainder, so the cadence does not drift
//! under callback jitter the way a reset-to-now trigger would.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(f64),
    #[error("window size must be nonzero")]
    ZeroWindowSize,
}

/// Fixed-cadence gate driven by display-refresh timestamps (milliseconds).
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Derive the target frame interval from the audio configuration.
    pub fn new(sample_rate: f64, window_size: usize) -> Result<Self, ClockError> {
        if !(sample_rate > 0.0) {
            return Err(ClockError::InvalidSampleRate(sample_rate));
        }
        if window_size == 0 {
            return Err(ClockError::ZeroWindowSize);
        }
        Ok(Self {
            interval_ms: 1000.0 / (sample_rate / window_size as f64),
            last_ms: None,
        })
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp of the last rendered frame, if any frame has rendered since
    /// the last reset.
    #[inline]
    pub fn last_frame_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Forget the previous frame; the next tick renders immediately.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Report whether a render pass is due at `now_ms`.
    ///
    /// Elapsed time is measured from the last *rendered* frame, not the last
    /// callback. On a firing tick the stored timestamp moves forward by
    /// `elapsed - (elapsed mod interval)`, never snapping to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let last = match self.last_ms {
            Some(last) => last,
            None => {
                self.last_ms = Some(now_ms);
                return true;
            }
        };
        let elapsed = now_ms - last;
        if elapsed < self.interval_ms {
            return false;
        }
        self.last_ms = Some(now_ms - elapsed % self.interval_ms);
        true
    }
}
