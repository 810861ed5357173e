use core::fmt;

/// Debounce error.
///
/// `E` is the error type of the underlying [`InputPin`](embedded_hal::digital::InputPin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Reading the pin failed. Sampling stops at the first failed read.
    Pin(E),
    /// A press was confirmed but the pin did not return to its inactive
    /// level before the release timeout ran out.
    TimedOut,
    /// A press was confirmed but the release wait was stopped through its
    /// cancellation flag.
    Cancelled,
}

impl<E> Error<E> {
    /// Returns the pin error, if this is one.
    pub fn pin_error(self) -> Option<E> {
        match self {
            Error::Pin(e) => Some(e),
            _ => None,
        }
    }

    /// `true` when the release wait gave up after a confirmed press.
    pub fn is_release_abandoned(&self) -> bool {
        matches!(self, Error::TimedOut | Error::Cancelled)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin read failed: {:?}", e),
            Error::TimedOut => f.write_str("timed out waiting for release"),
            Error::Cancelled => f.write_str("release wait cancelled"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_error_is_only_returned_for_read_faults() {
        assert_eq!(Error::Pin(7u8).pin_error(), Some(7));
        assert_eq!(Error::<u8>::TimedOut.pin_error(), None);
        assert_eq!(Error::<u8>::Cancelled.pin_error(), None);
    }

    #[test]
    fn abandoned_release_covers_timeout_and_cancel() {
        assert!(Error::<()>::TimedOut.is_release_abandoned());
        assert!(Error::<()>::Cancelled.is_release_abandoned());
        assert!(!Error::Pin(()).is_release_abandoned());
    }
}
