//! Budget window representation
//!
//! A window is a contiguous inclusive range of days within one month, used as
//! a budgeting sub-period. Windows are derived from settings on demand and are
//! never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous inclusive range of days-of-month (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// First day of the window (1-based)
    pub start: u32,
    /// Last day of the window (inclusive)
    pub end: u32,
}

impl Window {
    /// Create a new window
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start >= 1 && end >= start);
        Self { start, end }
    }

    /// Number of days covered by this window
    pub fn days(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Check if a day-of-month falls inside this window
    pub fn contains_day(&self, day: u32) -> bool {
        day >= self.start && day <= self.end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days() {
        assert_eq!(Window::new(1, 5).days(), 5);
        assert_eq!(Window::new(26, 31).days(), 6);
        assert_eq!(Window::new(7, 7).days(), 1);
    }

    #[test]
    fn test_contains_day() {
        let w = Window::new(6, 10);
        assert!(!w.contains_day(5));
        assert!(w.contains_day(6));
        assert!(w.contains_day(10));
        assert!(!w.contains_day(11));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Window::new(21, 25)), "Day 21-25");
    }
}
