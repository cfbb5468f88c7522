//! One-shot entrance animation.
//!
//! Progress is always recomputed from the clock, never integrated from the
//! previous frame, so it cannot drift. It drives the fly-in position, the
//! root scale, the opacity ramp and the core's emissive intensity.

use std::time::Duration;

/// How the curve treats time before the start cue.
///
/// Both produce the same values inside [0, 1]; they are kept apart because the
/// two scene variants were tuned against them separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeHandling {
    /// Clamp the linear fraction into [0, 1] before easing.
    ClampInput,
    /// Only cap the fraction at 1, ease, then floor the eased value at 0.
    ClampOutput,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceCurve {
    pub delay: Duration,
    pub duration: Duration,
    pub edges: EdgeHandling,
}

impl EntranceCurve {
    pub fn new(delay: Duration, duration: Duration, edges: EdgeHandling) -> Self {
        Self {
            delay,
            duration,
            edges,
        }
    }

    /// Eased progress at `now` for an entity started at `started_at`
    /// (both in seconds on the same clock).
    pub fn evaluate(&self, now: f64, started_at: f64) -> f32 {
        let since_cue = now - started_at - self.delay.as_secs_f64();
        let duration = self.duration.as_secs_f64();
        if duration <= 0.0 {
            return if since_cue >= 0.0 { 1.0 } else { 0.0 };
        }
        let fraction = since_cue / duration;
        let eased = match self.edges {
            EdgeHandling::ClampInput => ease_in_out_cubic(fraction.clamp(0.0, 1.0)),
            EdgeHandling::ClampOutput => ease_in_out_cubic(fraction.min(1.0)).max(0.0),
        };
        eased.clamp(0.0, 1.0) as f32
    }
}

/// Cubic ease-in-out: `4t³` below one half, `1 - (2 - 2t)³ / 2` above.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Eased entrance progress with input clamping.
///
/// Exactly 0 up to `started_at + delay`, exactly 1 from
/// `started_at + delay + duration` on, and non-decreasing in between.
pub fn progress(now: f64, started_at: f64, delay: Duration, duration: Duration) -> f32 {
    EntranceCurve::new(delay, duration, EdgeHandling::ClampInput).evaluate(now, started_at)
}

/// Per-entity entrance bookkeeping.
#[derive(Clone, Debug)]
pub struct AnimationState {
    pub started_at: f64,
    pub curve: EntranceCurve,
    progress: f32,
    complete: bool,
}

impl AnimationState {
    pub fn new(started_at: f64, curve: EntranceCurve) -> Self {
        Self {
            started_at,
            curve,
            progress: 0.0,
            complete: false,
        }
    }

    /// Re-evaluate progress at `now`. Once it has reached 1 the state is
    /// terminal and the curve is no longer consulted.
    pub fn advance(&mut self, now: f64) -> f32 {
        if self.complete {
            return self.progress;
        }
        self.progress = self.curve.evaluate(now, self.started_at);
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.complete = true;
            log::info!("[entrance] complete at t={:.3}s", now);
        }
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// `start + (end - start) * t`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Map `progress` onto the `[from, 1]` range, e.g. for scale and opacity ramps.
#[inline]
pub fn ramp_from(from: f32, progress: f32) -> f32 {
    from + (1.0 - from) * progress
}
