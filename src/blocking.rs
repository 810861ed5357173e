//! Blocking debounce over [`embedded_hal::delay::DelayNs`].
//!
//! Meant for a firmware main loop. Every call samples a full window, so it
//! blocks for at least [`SamplePolicy::window_us`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::policy::{Polarity, Runs, SamplePolicy};
use crate::release::{Next, ReleaseWait, Tracker};
use crate::Error;

/// Samples `pin` with the default policy (5 reads, 1 ms apart) and reports
/// whether it is stably at its active level.
pub fn sample_stable<P, D>(pin: &mut P, polarity: Polarity, delay: &mut D) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    sample_stable_with(&SamplePolicy::DEFAULT, pin, polarity, delay)
}

/// Samples `pin` with `policy`.
///
/// Always performs `policy.samples` reads, each followed by a delay of
/// `policy.interval_us`, whatever the readings. Only a failed read ends the
/// window early.
pub fn sample_stable_with<P, D>(
    policy: &SamplePolicy,
    pin: &mut P,
    polarity: Polarity,
    delay: &mut D,
) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    let mut runs = Runs::default();
    for _ in 0..policy.samples {
        let high = pin.is_high().map_err(|e| {
            warn!("debounce: pin read failed");
            Error::Pin(e)
        })?;
        runs.record(high);
        delay.delay_us(policy.interval_us);
    }

    let stable = runs.settled(polarity, policy.threshold);
    trace!(
        "debounce: high run {=u8}, low run {=u8}, stable {=bool}",
        runs.high,
        runs.low,
        stable
    );
    Ok(stable)
}

/// Reports a complete press and release with the default policy.
///
/// Returns `Ok(false)` after one window if no press is seen. Otherwise spins
/// on the raw pin level until the button is let go, however long that takes.
pub fn wait_for_release_cycle<P, D>(pin: &mut P, polarity: Polarity, delay: &mut D) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    wait_for_release_cycle_with(&SamplePolicy::DEFAULT, pin, polarity, delay, ReleaseWait::Forever)
}

/// Reports a complete press and release, bounding the release wait by `wait`.
///
/// `Err(Error::TimedOut)` and `Err(Error::Cancelled)` mean the press was
/// confirmed but the release was not observed.
pub fn wait_for_release_cycle_with<P, D>(
    policy: &SamplePolicy,
    pin: &mut P,
    polarity: Polarity,
    delay: &mut D,
    wait: ReleaseWait<'_>,
) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    if !sample_stable_with(policy, pin, polarity, delay)? {
        return Ok(false);
    }
    debug!("debounce: press confirmed, waiting for release");

    let mut tracker = Tracker::new(wait, policy.interval_us);
    loop {
        let high = pin.is_high().map_err(|e| {
            warn!("debounce: pin read failed while held");
            Error::Pin(e)
        })?;
        if !polarity.is_active(high) {
            debug!("debounce: released");
            return Ok(true);
        }

        match tracker.held() {
            Next::Spin => {}
            Next::Sleep(us) => delay.delay_us(us),
            Next::TimedOut => {
                warn!("debounce: release timed out");
                return Err(Error::TimedOut);
            }
            Next::Cancelled => {
                warn!("debounce: release wait cancelled");
                return Err(Error::Cancelled);
            }
        }
    }
}
