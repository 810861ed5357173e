//! Async debounce over [`embedded_hal_async::delay::DelayNs`].
//!
//! Same results as [`crate::blocking`]. Sampling intervals are awaited, and
//! the release spin yields to the executor between reads so other tasks are
//! not starved while a button is held.

use embassy_futures::yield_now;
use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::policy::{Polarity, Runs, SamplePolicy};
use crate::release::{Next, ReleaseWait, Tracker};
use crate::Error;

pub async fn sample_stable<P, D>(pin: &mut P, polarity: Polarity, delay: &mut D) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    sample_stable_with(&SamplePolicy::DEFAULT, pin, polarity, delay).await
}

pub async fn sample_stable_with<P, D>(
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
        delay.delay_us(policy.interval_us).await;
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

pub async fn wait_for_release_cycle<P, D>(
    pin: &mut P,
    polarity: Polarity,
    delay: &mut D,
) -> Result<bool, Error<P::Error>>
where
    P: InputPin,
    D: DelayNs,
{
    wait_for_release_cycle_with(&SamplePolicy::DEFAULT, pin, polarity, delay, ReleaseWait::Forever).await
}

pub async fn wait_for_release_cycle_with<P, D>(
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
    if !sample_stable_with(policy, pin, polarity, delay).await? {
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
            Next::Spin => yield_now().await,
            Next::Sleep(us) => delay.delay_us(us).await,
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
