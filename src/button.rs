//! Button driver.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::blocking;
use crate::policy::{Polarity, SamplePolicy};
use crate::release::ReleaseWait;
use crate::Error;

/// A debounced push button on one input pin.
///
/// Holds configuration only. Every call samples a fresh window, so results
/// never depend on earlier calls.
pub struct Button<P, D> {
    pin: P,
    delay: D,
    polarity: Polarity,
    policy: SamplePolicy,
}

impl<P: InputPin, D: DelayNs> Button<P, D> {
    #[inline]
    pub fn new(pin: P, polarity: Polarity, delay: D) -> Self {
        Self::with_policy(pin, polarity, delay, SamplePolicy::DEFAULT)
    }

    #[inline]
    pub fn with_policy(pin: P, polarity: Polarity, delay: D, policy: SamplePolicy) -> Self {
        Self {
            pin,
            delay,
            polarity,
            policy,
        }
    }

    /// Samples one window and reports whether the button is held down.
    pub fn is_pressed(&mut self) -> Result<bool, Error<P::Error>> {
        blocking::sample_stable_with(&self.policy, &mut self.pin, self.polarity, &mut self.delay)
    }

    /// `Ok(true)` once the button has been pressed and let go again.
    ///
    /// Blocks for as long as the button is held.
    pub fn wait_for_release_cycle(&mut self) -> Result<bool, Error<P::Error>> {
        self.wait_for_release_cycle_with(ReleaseWait::Forever)
    }

    pub fn wait_for_release_cycle_with(&mut self, wait: ReleaseWait<'_>) -> Result<bool, Error<P::Error>> {
        blocking::wait_for_release_cycle_with(&self.policy, &mut self.pin, self.polarity, &mut self.delay, wait)
    }

    /// Current raw level, without debouncing.
    #[inline]
    pub fn is_high_raw(&mut self) -> Result<bool, Error<P::Error>> {
        self.pin.is_high().map_err(Error::Pin)
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline]
    pub fn policy(&self) -> &SamplePolicy {
        &self.policy
    }

    #[inline]
    pub fn set_policy(&mut self, policy: SamplePolicy) {
        self.policy = policy;
    }

    /// Gives the pin and delay back.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}

impl<P, D> core::fmt::Debug for Button<P, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Button")
            .field("polarity", &self.polarity)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
