//! Difficulty and gravity timing
//!
//! Difficulty is a real-valued level clamped to `[min, max]`. It sets both the
//! gravity interval (`1 / level` seconds) and the integer score multiplier.
//! A rising difficulty gains `increase_per_second` levels per simulated second.

use std::time::Duration;

use crate::config::DifficultyConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    current: f32,
    increase_per_second: f32,
    min: f32,
    max: f32,
}

impl Difficulty {
    /// Build from an already validated config
    pub fn new(config: &DifficultyConfig) -> Self {
        Self {
            current: config.initial.clamp(config.min, config.max),
            increase_per_second: config.increase_per_second,
            min: config.min,
            max: config.max,
        }
    }

    /// Fixed difficulty at `level`
    pub fn fixed(level: f32) -> Self {
        Self::new(&DifficultyConfig {
            initial: level,
            ..DifficultyConfig::default()
        })
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Integer level used as the score multiplier, at least 1
    pub fn level(&self) -> u32 {
        (self.current.floor() as u32).max(1)
    }

    /// Gravity interval at the current level
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.current)
    }

    pub fn is_rising(&self) -> bool {
        self.increase_per_second > 0.0
    }

    /// Advance by `elapsed` of simulated time
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.is_rising() || self.current >= self.max {
            return;
        }
        let gained = elapsed.as_secs_f32() * self.increase_per_second;
        self.current = (self.current + gained).clamp(self.min, self.max);
    }
}

/// Countdown driving automatic descent
///
/// Armed when a piece spawns, re-armed after every firing and stopped when
/// the piece locks. A stopped timer never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    remaining: Option<Duration>,
}

impl GravityTimer {
    pub fn new() -> Self {
        Self { remaining: None }
    }

    /// (Re)start the countdown
    pub fn start(&mut self, interval: Duration) {
        self.remaining = Some(interval);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Count down by `elapsed`; returns `true` when the timer fires
    ///
    /// A fired timer stays at zero until the caller re-arms or stops it.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let left = remaining.saturating_sub(elapsed);
        self.remaining = Some(left);
        left.is_zero()
    }
}
