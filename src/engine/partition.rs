//! Window partitioner
//!
//! Splits a month's days into contiguous budget windows of a configured size.
//! A short trailing remainder is merged into the last window rather than
//! emitted on its own: no window is shorter than the configured size unless it
//! is the only window of the month.

use chrono::{Datelike, NaiveDate};

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::Window;

use super::calendar::days_in_month;

/// Partition a month into budget windows, earliest first
///
/// Windows are contiguous, non-overlapping, start at day 1 and together cover
/// every day of the month exactly once. Given a proposed
/// `end = start + window_size - 1`, the window absorbs the rest of the month
/// when `end` reaches the last day or the remainder after it would be shorter
/// than `window_size`.
///
/// # Errors
///
/// Returns [`MoneyTrackError::InvalidWindowSize`] for a zero window size. Any
/// positive size partitions correctly; restricting to the supported sizes is
/// the settings layer's job.
pub fn compute_windows(year: i32, month: u32, window_size: u32) -> MoneyTrackResult<Vec<Window>> {
    if window_size == 0 {
        return Err(MoneyTrackError::InvalidWindowSize { size: 0 });
    }

    let days = days_in_month(year, month);
    let mut windows = Vec::with_capacity((days / window_size) as usize);
    let mut start = 1u32;

    loop {
        let end = start + window_size - 1;
        if end >= days || days - end < window_size {
            // Merge the short remainder into this window and stop.
            windows.push(Window::new(start, days));
            break;
        }
        windows.push(Window::new(start, end));
        start = end + 1;
    }

    Ok(windows)
}

/// The window containing `today`, plus its zero-based index in the sequence
///
/// Falls back to the last window if no window matches; the partition invariant
/// makes that unreachable, but a bad fallback beats a panic.
pub fn current_window(today: NaiveDate, window_size: u32) -> MoneyTrackResult<(Window, usize)> {
    let windows = compute_windows(today.year(), today.month(), window_size)?;
    let day = today.day();

    let found = windows
        .iter()
        .enumerate()
        .find(|(_, w)| w.contains_day(day))
        .map(|(i, w)| (*w, i));

    Ok(found.unwrap_or((windows[windows.len() - 1], windows.len() - 1)))
}
