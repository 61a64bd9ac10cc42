use std::time::{Duration, Instant};

/// Number that counts up from zero to a target over a fixed duration.
///
/// The shown value is `floor(progress * target)` with linear progress, so it
/// only reaches the target once the duration has fully elapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedCounter {
    target: u64,
    duration: Duration,
    prefix: String,
    suffix: String,
    started: Option<Instant>,
}

impl AnimatedCounter {
    /// Counter reaching `target` after the default two seconds.
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: Duration::from_secs(2),
            prefix: String::new(),
            suffix: String::new(),
            started: None,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Animation progress in `[0, 1]` after `elapsed`.
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Value shown after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress_at(elapsed);
        if progress >= 1.0 {
            self.target
        } else {
            (progress * self.target as f64).floor() as u64
        }
    }

    /// Formatted text after `elapsed`, e.g. `"50,000+"`.
    pub fn text_at(&self, elapsed: Duration) -> String {
        format!("{}{}{}", self.prefix, group_thousands(self.value_at(elapsed)), self.suffix)
    }

    /// Start counting; the first sample defines time zero.
    pub fn start(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Current value, starting the animation on first use.
    pub fn sample(&mut self, now: Instant) -> u64 {
        let started = *self.started.get_or_insert(now);
        self.value_at(now.saturating_duration_since(started))
    }

    /// Whether the counter has reached its target at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.started
            .map(|s| self.progress_at(now.saturating_duration_since(s)) >= 1.0)
            .unwrap_or(false)
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
