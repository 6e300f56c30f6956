//! Slot grid for a store day, and date/time parsing
//!
//! The bookable grid is fixed business data: 09:00 through 17:30 inclusive,
//! 30-minute step, 18 slots per barber per day, identical for every weekday.
//! Everything here is pure; no I/O.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{AppError, AppResult};

/// First bookable hour of the day
pub const OPEN_HOUR: u32 = 9;
/// Hour of the last bookable slot (the slot at `LAST_HOUR:30` is included)
pub const LAST_HOUR: u32 = 17;
/// Grid step in minutes
pub const SLOT_MINUTES: u32 = 30;
/// Number of slots per barber per day
pub const SLOTS_PER_DAY: usize = 18;

/// Generate the ordered slot grid for one calendar day.
///
/// Deterministic for any valid date; ascending; exactly [`SLOTS_PER_DAY`]
/// entries.
pub fn day_grid(date: NaiveDate) -> Vec<NaiveDateTime> {
    (OPEN_HOUR..=LAST_HOUR)
        .flat_map(|hour| [0, SLOT_MINUTES].map(move |minute| (hour, minute)))
        .filter_map(|(hour, minute)| date.and_hms_opt(hour, minute, 0))
        .collect()
}

/// Whether a timestamp falls on the bookable grid of its day
pub fn is_on_grid(ts: NaiveDateTime) -> bool {
    let time = ts.time();
    time.second() == 0
        && time.nanosecond() == 0
        && time.minute() % SLOT_MINUTES == 0
        && (OPEN_HOUR..=LAST_HOUR).contains(&time.hour())
}

/// Parse a `YYYY-MM-DD` day
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".to_string()))
}

/// Parse a `YYYY-MM-DD` day plus `HH:MM` time into a slot timestamp
pub fn parse_slot(date: &str, time: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::Validation("Invalid date or time format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn grid_has_eighteen_ascending_slots() {
        let grid = day_grid(date("2024-06-10"));
        assert_eq!(grid.len(), SLOTS_PER_DAY);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn grid_bounds_and_step() {
        let grid = day_grid(date("2024-06-10"));
        assert_eq!(grid[0], parse_slot("2024-06-10", "09:00").unwrap());
        assert_eq!(grid[17], parse_slot("2024-06-10", "17:30").unwrap());
        assert!(grid
            .windows(2)
            .all(|w| w[1] - w[0] == chrono::Duration::minutes(SLOT_MINUTES as i64)));
    }

    #[test]
    fn grid_is_weekday_independent() {
        // A Saturday and a Monday produce the same template
        let saturday = day_grid(date("2024-06-08"));
        let monday = day_grid(date("2024-06-10"));
        assert_eq!(saturday.len(), monday.len());
        assert_eq!(saturday[0].time(), monday[0].time());
        assert_eq!(saturday[17].time(), monday[17].time());
    }

    #[test]
    fn grid_membership() {
        assert!(is_on_grid(parse_slot("2024-06-10", "09:00").unwrap()));
        assert!(is_on_grid(parse_slot("2024-06-10", "10:30").unwrap()));
        assert!(is_on_grid(parse_slot("2024-06-10", "17:30").unwrap()));
        // Off-grid: before opening, after last slot, misaligned minute
        assert!(!is_on_grid(parse_slot("2024-06-10", "08:30").unwrap()));
        assert!(!is_on_grid(parse_slot("2024-06-10", "18:00").unwrap()));
        assert!(!is_on_grid(parse_slot("2024-06-10", "09:17").unwrap()));
    }

    #[test]
    fn every_grid_slot_is_on_grid() {
        for ts in day_grid(date("2024-02-29")) {
            assert!(is_on_grid(ts), "{ts} should be on grid");
        }
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_slot("2024-06-10", "25:00").is_err());
        assert!(parse_slot("2024-06-10", "ten").is_err());
        assert!(parse_date("2024-06-10").is_ok());
        assert!(parse_slot("2024-06-10", "10:00").is_ok());
    }
}
