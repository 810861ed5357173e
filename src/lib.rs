//! Fixed-window debouncing for GPIO push buttons.
//!
//! A pin is read a fixed number of times at a fixed interval (5 reads, 1 ms
//! apart by default). The button counts as pressed only when the window ends
//! with a consecutive run of active reads longer than half the window. On top
//! of that, [`wait_for_release_cycle`] reports a complete press followed by a
//! release.
//!
//! Pins and delays come in through the `embedded-hal` traits, so any HAL
//! `Input` works.
//!
//! ```ignore
//! use gpio_debounce::{wait_for_release_cycle, Polarity};
//!
//! let mut button = Input::new(p.PE3, Pull::Up);
//! loop {
//!     if wait_for_release_cycle(&mut button, Polarity::ActiveLow, &mut delay)? {
//!         led.toggle();
//!     }
//! }
//! ```
#![cfg_attr(not(test), no_std)]

// This must go FIRST so that all the other modules see its macros.
mod fmt;

mod error;
pub use error::Error;

pub mod policy;
pub use policy::{Polarity, SamplePolicy};

pub mod release;
pub use release::ReleaseWait;

pub mod blocking;
pub use blocking::{sample_stable, sample_stable_with, wait_for_release_cycle, wait_for_release_cycle_with};

pub mod asynch;

pub mod button;
pub use button::Button;

pub use portable_atomic::AtomicBool;

#[cfg(test)]
mod testing;
