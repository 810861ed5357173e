//! Button polarity and sampling policy.

use core::ops::Not;

/// Logic level that counts as "pressed".
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed reads as logical 1 (button to VCC with pull-down).
    ActiveHigh,
    /// Pressed reads as logical 0 (button to GND with pull-up).
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Whether a raw level is the active one.
    #[inline]
    pub const fn is_active(self, raw_high: bool) -> bool {
        match self {
            Polarity::ActiveHigh => raw_high,
            Polarity::ActiveLow => !raw_high,
        }
    }
}

/// `true` selects active-high, `false` active-low.
impl From<bool> for Polarity {
    fn from(active_high: bool) -> Self {
        if active_high {
            Self::ActiveHigh
        } else {
            Self::ActiveLow
        }
    }
}

impl From<Polarity> for bool {
    fn from(polarity: Polarity) -> bool {
        matches!(polarity, Polarity::ActiveHigh)
    }
}

impl Not for Polarity {
    type Output = Polarity;

    fn not(self) -> Polarity {
        match self {
            Polarity::ActiveHigh => Polarity::ActiveLow,
            Polarity::ActiveLow => Polarity::ActiveHigh,
        }
    }
}

/// How a pin is sampled before a level is declared stable.
///
/// The pin is read `samples` times, `interval_us` apart. A level is stable
/// when the window ends with more than `threshold` consecutive reads of it.
/// Any discordant read restarts the run, so this is stricter than a plain
/// majority tally.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplePolicy {
    /// Reads per window.
    pub samples: u8,
    /// Delay after every read, in microseconds.
    pub interval_us: u32,
    /// The trailing run must be strictly longer than this.
    pub threshold: u8,
}

impl SamplePolicy {
    /// 5 reads, 1 ms apart, run of 3 or more required.
    pub const DEFAULT: Self = Self::new(5, 1_000);

    /// Policy with the majority threshold `samples / 2`.
    pub const fn new(samples: u8, interval_us: u32) -> Self {
        Self {
            samples,
            interval_us,
            threshold: samples / 2,
        }
    }

    /// Changes the sample count and resets the threshold to `samples / 2`.
    pub const fn with_samples(self, samples: u8) -> Self {
        Self::new(samples, self.interval_us)
    }

    pub const fn with_interval_us(mut self, interval_us: u32) -> Self {
        self.interval_us = interval_us;
        self
    }

    /// Overrides the majority threshold.
    ///
    /// A threshold at or above `samples` can never be met.
    pub const fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Minimum time one sampling window blocks for.
    pub const fn window_us(&self) -> u64 {
        self.samples as u64 * self.interval_us as u64
    }
}

impl Default for SamplePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Trailing-run counters of one sampling window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Runs {
    pub high: u8,
    pub low: u8,
}

impl Runs {
    pub(crate) fn record(&mut self, raw_high: bool) {
        if raw_high {
            self.high = self.high.saturating_add(1);
            self.low = 0;
        } else {
            self.low = self.low.saturating_add(1);
            self.high = 0;
        }
    }

    /// Whether the window settled on the active level of `polarity`.
    pub(crate) fn settled(&self, polarity: Polarity, threshold: u8) -> bool {
        let run = match polarity {
            Polarity::ActiveHigh => self.high,
            Polarity::ActiveLow => self.low,
        };
        run > threshold
    }
}
