//! Trail configuration.
//!
//! Every tunable of the pointer trail lives in [`TrailConfig`]. The defaults
//! reproduce the landing page's hardcoded values, and every field carries
//! `#[serde(default)]` so a config file only needs the keys it changes.
//!
//! ```json
//! {
//!   "max_particles": 40,
//!   "spawn_probability": 0.1,
//!   "palette": ["#E4CFA4", "#DAD7F0", "#FFFFFF"]
//! }
//! ```

use crate::error::ConfigError;
use crate::lifecycle::Decay;
use crate::visuals::{Palette, GOLD, LILAC};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Largest accepted `max_particles`. The field and the GPU instance buffer
/// are both sized up front from the bound.
pub const MAX_PARTICLES_LIMIT: usize = 100_000;

fn default_max_particles() -> usize {
    20
}

fn default_spawn_probability() -> f32 {
    0.05
}

fn default_velocity_range() -> [f32; 2] {
    [-1.0, 1.0]
}

fn default_size_range() -> [f32; 2] {
    [2.0, 8.0]
}

fn default_life_decrement() -> f32 {
    0.02
}

fn default_size_decay() -> f32 {
    0.99
}

fn default_tick_interval_ms() -> u64 {
    16
}

fn default_palette() -> Vec<String> {
    vec![GOLD.to_string(), LILAC.to_string()]
}

/// Complete pointer trail configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrailConfig {
    /// Upper bound on live particles. Oldest are evicted first.
    #[serde(default = "default_max_particles")]
    pub max_particles: usize,
    /// Chance that a single pointer-move event spawns a particle.
    #[serde(default = "default_spawn_probability")]
    pub spawn_probability: f32,
    /// Per-axis velocity range in pixels per tick.
    #[serde(default = "default_velocity_range")]
    pub velocity_range: [f32; 2],
    /// Initial size range in pixels.
    #[serde(default = "default_size_range")]
    pub size_range: [f32; 2],
    /// Life removed each tick (life starts at 1.0).
    #[serde(default = "default_life_decrement")]
    pub life_decrement: f32,
    /// Size multiplier applied each tick.
    #[serde(default = "default_size_decay")]
    pub size_decay: f32,
    /// Tick period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Particle colours as `#RRGGBB` strings.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_particles: default_max_particles(),
            spawn_probability: default_spawn_probability(),
            velocity_range: default_velocity_range(),
            size_range: default_size_range(),
            life_decrement: default_life_decrement(),
            size_decay: default_size_decay(),
            tick_interval_ms: default_tick_interval_ms(),
            palette: default_palette(),
        }
    }
}

impl TrailConfig {
    /// Create a config with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded trail config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Set the live particle bound.
    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = max;
        self
    }

    /// Set the spawn gate probability.
    pub fn with_spawn_probability(mut self, probability: f32) -> Self {
        self.spawn_probability = probability;
        self
    }

    /// Set the per-axis velocity range.
    pub fn with_velocity_range(mut self, min: f32, max: f32) -> Self {
        self.velocity_range = [min, max];
        self
    }

    /// Set the initial size range.
    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = [min, max];
        self
    }

    /// Set the per-tick life decrement.
    pub fn with_life_decrement(mut self, decrement: f32) -> Self {
        self.life_decrement = decrement;
        self
    }

    /// Set the per-tick size decay factor.
    pub fn with_size_decay(mut self, decay: f32) -> Self {
        self.size_decay = decay;
        self
    }

    /// Set the tick period.
    ///
    /// The period is stored in whole milliseconds, rounded up, so any non-zero
    /// duration stays non-zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        let ms = interval.as_micros().div_ceil(1000);
        self.tick_interval_ms = u64::try_from(ms).unwrap_or(u64::MAX);
        self
    }

    /// Replace the palette.
    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Tick period as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Per-tick decay rules.
    pub fn decay(&self) -> Decay {
        Decay::new(self.life_decrement, self.size_decay)
    }

    /// Parse the palette strings.
    pub fn parsed_palette(&self) -> Result<Palette, ConfigError> {
        Palette::from_hex(&self.palette)
    }

    /// Check every invariant the particle field relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_particles == 0 {
            return Err(ConfigError::ZeroBound);
        }
        if self.max_particles > MAX_PARTICLES_LIMIT {
            return Err(ConfigError::BoundTooLarge(self.max_particles));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::Probability(self.spawn_probability));
        }
        check_range("velocity_range", self.velocity_range)?;
        check_range("size_range", self.size_range)?;
        if self.size_range[0] <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size_range[0]));
        }
        if self.decay().ticks_to_live().is_none() {
            return Err(ConfigError::Decrement(self.life_decrement));
        }
        if !(0.0..=1.0).contains(&self.size_decay) {
            return Err(ConfigError::Decay(self.size_decay));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.parsed_palette()?;
        Ok(())
    }
}

fn check_range(field: &'static str, [min, max]: [f32; 2]) -> Result<(), ConfigError> {
    // rand's uniform sampler needs a finite span as well as finite endpoints.
    if min.is_finite() && max.is_finite() && min <= max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Range { field, min, max })
    }
}
