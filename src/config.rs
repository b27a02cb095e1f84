use crate::game::DrawMode;
use crate::patterns::WinPattern;
use std::time::Duration;
use tracing::warn;

/// Settings for one [`SessionController`](crate::session::SessionController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Patterns evaluated after every draw, in evaluation order.
    pub patterns: Vec<WinPattern>,
    /// Interval used when a front end asks for auto mode without choosing one.
    pub auto_interval: Duration,
    /// Seed for the draw RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            patterns: WinPattern::ALL.to_vec(),
            auto_interval: DrawMode::DEFAULT_AUTO_INTERVAL,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Shortest auto-draw interval accepted.
    pub const MIN_AUTO_INTERVAL: Duration = Duration::from_millis(50);

    pub fn with_patterns(mut self, patterns: impl IntoIterator<Item = WinPattern>) -> Self {
        self.patterns = patterns.into_iter().collect();
        self
    }

    pub fn with_auto_interval(mut self, interval: Duration) -> Self {
        self.auto_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The auto mode this config describes.
    pub fn auto_mode(&self) -> DrawMode {
        DrawMode::Auto { interval: self.auto_interval }
    }

    /// Fix out-of-range values so the config is safe to use:
    /// - `auto_interval` raised to [`Self::MIN_AUTO_INTERVAL`].
    /// - duplicate patterns dropped, first occurrence kept.
    pub fn validated(mut self) -> Self {
        if self.auto_interval < Self::MIN_AUTO_INTERVAL {
            warn!(
                interval = ?self.auto_interval,
                min = ?Self::MIN_AUTO_INTERVAL,
                "auto interval below minimum, raising"
            );
            self.auto_interval = Self::MIN_AUTO_INTERVAL;
        }
        let mut seen = Vec::with_capacity(self.patterns.len());
        self.patterns.retain(|p| {
            if seen.contains(p) {
                false
            } else {
                seen.push(*p);
                true
            }
        });
        if seen.is_empty() {
            warn!("no win patterns configured; wins will never be reported");
        }
        self
    }
}
