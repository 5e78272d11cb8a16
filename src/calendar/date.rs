//! Pure date arithmetic for the month grid.
//!
//! The engine does its own proleptic-Gregorian math (civil day counts)
//! instead of going through `chrono`, so weekday and rollover behaviour is
//! deterministic and independent of host locale. `chrono` is only used at
//! the application edge for the "today" snapshot and the clock.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month out of range: expected 1..=12, got {0}")]
    InvalidMonth(u32),

    #[error("invalid date string: {0}")]
    InvalidDateString(String),
}

// ---------------------------------------------------------------------------
// YearMonth
// ---------------------------------------------------------------------------

/// A (year, month) pair. Month is always 1..=12 once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Number of days in this month (28/29/30/31).
    pub fn days_in_month(self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// The first day of this month.
    pub fn start_of_month(self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }

    /// Shift by `n` months, rolling the year in either direction.
    pub fn add_months(self, n: i32) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
        Self {
            year: zero_based.div_euclid(12) as i32,
            month: zero_based.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(self) -> Self {
        self.add_months(-1)
    }

    pub fn next(self) -> Self {
        self.add_months(1)
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ---------------------------------------------------------------------------
// CalendarDate
// ---------------------------------------------------------------------------

/// A pure (year, month, day) value. No wall clock, no timezone.
///
/// Equality and ordering are derived from the triple; "same day" is plain
/// `==`. Month is validated at construction; day is a caller contract
/// (every date the engine itself produces is valid by construction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        debug_assert!((1..=31).contains(&day), "day out of range: {day}");
        Ok(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn year_month(self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Weekday index, 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u32 {
        // Day 0 of the civil count (1970-01-01) is a Thursday.
        (days_from_civil(self.year, self.month, self.day) + 4).rem_euclid(7) as u32
    }

    /// Shift by `n` calendar days, rolling month and year boundaries in
    /// either direction (Dec 31 + 1 day is Jan 1 of the next year).
    pub fn add_days(self, n: i64) -> Self {
        let (year, month, day) = civil_from_days(days_from_civil(self.year, self.month, self.day) + n);
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse a `YYYY-MM-DD` string, as used for metrics file keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CalendarError::InvalidDateString(s.to_string());
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let ym = YearMonth { year, month };
        if day == 0 || day > ym.days_in_month() {
            return Err(bad());
        }
        Ok(Self { year, month, day })
    }
}

// ---------------------------------------------------------------------------
// Civil day-count conversions (proleptic Gregorian)
// ---------------------------------------------------------------------------

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days since 1970-01-01 for a civil date. Hinnant's algorithm.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64 - i64::from(month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Inverse of `days_from_civil`.
fn civil_from_days(z: i64) -> (i32, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = (if month <= 2 { y + 1 } else { y }) as i32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert_eq!(
            YearMonth::new(2024, 0).unwrap_err(),
            CalendarError::InvalidMonth(0)
        );
        assert_eq!(
            YearMonth::new(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth(13)
        );
        assert!(CalendarDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn test_days_in_month_leap_rule() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_weekday_known_anchors() {
        // 1970-01-01 was a Thursday.
        assert_eq!(date(1970, 1, 1).weekday(), 4);
        // 2023-10-01 was a Sunday.
        assert_eq!(date(2023, 10, 1).weekday(), 0);
        // 2024-02-29 was a Thursday.
        assert_eq!(date(2024, 2, 29).weekday(), 4);
        // 1900-01-01 was a Monday (pre-epoch).
        assert_eq!(date(1900, 1, 1).weekday(), 1);
    }

    #[test]
    fn test_add_days_rollovers() {
        assert_eq!(date(2024, 12, 31).add_days(1), date(2025, 1, 1));
        assert_eq!(date(2024, 1, 1).add_days(-1), date(2023, 12, 31));
        assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 28).add_days(1), date(2023, 3, 1));
        assert_eq!(date(2024, 3, 15).add_days(0), date(2024, 3, 15));
        assert_eq!(date(2024, 1, 15).add_days(366), date(2025, 1, 15));
    }

    #[test]
    fn test_add_months_rollovers() {
        let dec = YearMonth::new(2024, 12).unwrap();
        assert_eq!(dec.add_months(1), YearMonth::new(2025, 1).unwrap());
        let jan = YearMonth::new(2024, 1).unwrap();
        assert_eq!(jan.add_months(-1), YearMonth::new(2023, 12).unwrap());
        assert_eq!(jan.add_months(-13), YearMonth::new(2022, 12).unwrap());
        assert_eq!(jan.add_months(25), YearMonth::new(2026, 2).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 3, 5) < date(2024, 3, 6));
    }

    #[test]
    fn test_parse_date_string() {
        assert_eq!("2024-03-15".parse::<CalendarDate>().unwrap(), date(2024, 3, 15));
        assert!("2024-13-01".parse::<CalendarDate>().is_err());
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
        assert!("garbage".parse::<CalendarDate>().is_err());
        assert!("2024-03".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let d = date(2024, 3, 5);
        assert_eq!(d.to_string(), "2024-03-05");
        assert_eq!(d.to_string().parse::<CalendarDate>().unwrap(), d);
    }
}
