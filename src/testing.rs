//! Host test doubles.

use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

/// Records every delay it is asked for, in microseconds.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub calls: Vec<u32>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.calls.iter().map(|&us| us as u64).sum()
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls.push(us);
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls.push(ns / 1_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.calls.push(us);
    }
}

/// Pin mock that expects exactly these levels to be read, in order.
pub fn scripted(levels: &[u8]) -> PinMock {
    let expectations: Vec<Transaction> = levels
        .iter()
        .map(|&l| Transaction::get(if l != 0 { State::High } else { State::Low }))
        .collect();
    PinMock::new(&expectations)
}

/// Pin that reads `ok_reads` high levels and then fails.
#[derive(Debug)]
pub struct FaultyPin {
    pub ok_reads: usize,
    pub reads: usize,
}

impl FaultyPin {
    pub fn new(ok_reads: usize) -> Self {
        Self { ok_reads, reads: 0 }
    }
}

impl ErrorType for FaultyPin {
    type Error = ErrorKind;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        if self.reads > self.ok_reads {
            Err(ErrorKind::Other)
        } else {
            Ok(true)
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
