//! Validated selector types
//!
//! `HourOfDay` makes an out-of-range hour unrepresentable: the only way to
//! obtain one is through `new`, which rejects (rather than clamps) anything
//! outside `[0, 23]`. All hours are timezone-naive local time.

use std::fmt;

use super::errors::HourOutOfRange;

/// Hour-of-day selector in `[0, 23]`, timezone-naive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Construct a validated hour. Values above 23 are rejected.
    ///
    /// # Errors
    /// Returns [`HourOutOfRange`] if `hour > 23`.
    pub fn new(hour: u8) -> Result<Self, HourOutOfRange> {
        if hour > 23 {
            return Err(HourOutOfRange(hour));
        }
        Ok(Self(hour))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Next hour, wrapping 23 → 0 (selector navigation).
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % 24)
    }

    /// Previous hour, wrapping 0 → 23.
    #[must_use]
    pub fn prev(self) -> Self {
        Self((self.0 + 23) % 24)
    }

    /// The window caption used by the panels, e.g. `"17:00–18:00"`.
    /// Hour 23 wraps to `"23:00–0:00"` like the source data's day boundary.
    #[must_use]
    pub fn window_caption(self) -> String {
        format!("{}:00–{}:00", self.0, (self.0 + 1) % 24)
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = HourOutOfRange;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hours() {
        assert_eq!(HourOfDay::new(0).unwrap().get(), 0);
        assert_eq!(HourOfDay::new(23).unwrap().get(), 23);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(HourOfDay::new(24).is_err());
        assert!(HourOfDay::new(255).is_err());
    }

    #[test]
    fn test_wrapping_navigation() {
        let h = HourOfDay::new(23).unwrap();
        assert_eq!(h.next().get(), 0);
        let h = HourOfDay::new(0).unwrap();
        assert_eq!(h.prev().get(), 23);
        assert_eq!(h.next().get(), 1);
    }

    #[test]
    fn test_window_caption_wraps_at_midnight() {
        assert_eq!(HourOfDay::new(17).unwrap().window_caption(), "17:00–18:00");
        assert_eq!(HourOfDay::new(23).unwrap().window_caption(), "23:00–0:00");
    }
}
