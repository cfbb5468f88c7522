use instant::Instant;

/// Wall-clock wrapper that hands out monotonically non-decreasing elapsed
/// seconds since it was started.
///
/// The clock is sampled by the host once per frame; nothing accumulates
/// between samples, so a dropped or late frame never causes drift.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    origin: Instant,
    last: f64,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(origin: Instant) -> Self {
        Self { origin, last: 0.0 }
    }

    /// Elapsed seconds at `now`. Never smaller than a previous sample, even if
    /// the platform timer steps backwards.
    pub fn sample(&mut self, now: Instant) -> f64 {
        let raw = if now > self.origin {
            (now - self.origin).as_secs_f64()
        } else {
            0.0
        };
        self.last = self.last.max(raw);
        self.last
    }

    pub fn now(&mut self) -> f64 {
        self.sample(Instant::now())
    }

    /// Most recent sample, without reading the timer.
    pub fn elapsed(&self) -> f64 {
        self.last
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::start()
    }
}
