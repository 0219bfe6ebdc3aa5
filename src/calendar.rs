// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day ↔ proleptic Gregorian civil date conversion.
//!
//! The inverse direction follows Meeus (1998) ch. 7 with the Gregorian
//! century correction applied unconditionally, so dates before 1582-10-15
//! come out in the proleptic Gregorian calendar rather than the Julian one.
//! Time of day is resolved to the minute: the hour is truncated and the
//! remaining fraction rounded half-up, carrying into the hour and then into
//! the next day on overflow.
//!
//! ```rust
//! use seasons::JulianDate;
//!
//! let civil = JulianDate::new(2_451_545.0).to_civil();
//! assert_eq!(civil.to_string(), "2000-01-01 12:00");
//! assert_eq!(civil.to_julian_day(), JulianDate::new(2_451_545.0));
//! ```

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SeasonError;
use super::JulianDate;

const MINUTES_PER_DAY: f64 = 1_440.0;

/// A proleptic Gregorian date and time of day at minute resolution (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    /// Proleptic Gregorian year; may be zero or negative.
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
    /// Hour, 0–23.
    pub hour: u32,
    /// Minute, 0–59.
    pub minute: u32,
}

impl CivilDateTime {
    /// Assemble from fields; no range check is made.
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Civil fields of a Julian day, rounded to the minute.
    pub fn from_julian_day(jd: JulianDate) -> Self {
        let jd = jd.value();
        let day_number = round_half_up(jd);

        let hours = 24.0 * (jd + 0.5 - day_number);
        let mut hour = hours.floor();
        let mut minute = round_half_up((hours - hour) * 60.0);
        if minute == 60.0 {
            minute = 0.0;
            hour += 1.0;
        }

        let (year, month, day) = if hour == 24.0 {
            hour = 0.0;
            gregorian_date(day_number + 1.0)
        } else {
            gregorian_date(day_number)
        };

        Self::new(year, month, day, hour as u32, minute as u32)
    }

    /// Julian day of these civil fields (Meeus eq. 7.1, Gregorian).
    pub fn to_julian_day(&self) -> JulianDate {
        let (mut y, mut m) = (f64::from(self.year), f64::from(self.month));
        if self.month <= 2 {
            y -= 1.0;
            m += 12.0;
        }
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        let day = f64::from(self.day)
            + (f64::from(self.hour) * 60.0 + f64::from(self.minute)) / MINUTES_PER_DAY;

        JulianDate::new(
            (365.25 * (y + 4_716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1_524.5,
        )
    }

    /// Build the UTC instant at second zero of this minute.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, SeasonError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .map(|naive| naive.and_utc())
            .ok_or(SeasonError::UnrepresentableDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }

    /// Civil fields of a UTC instant; seconds are discarded.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
        )
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Year, month and day of an integral Julian day number.
fn gregorian_date(day_number: f64) -> (i32, u32, u32) {
    let alpha = ((day_number - 1_867_216.25) / 36_524.25).floor();
    let b = day_number + alpha - (alpha / 4.0).floor() + 1_525.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = 365.0 * c + (c / 4.0).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4_716.0 } else { c - 4_715.0 };

    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use qtty::Days;

    #[test]
    fn known_julian_days_to_civil() {
        assert_eq!(
            JulianDate::new(2_451_545.0).to_civil(),
            CivilDateTime::new(2000, 1, 1, 12, 0)
        );
        assert_eq!(
            JulianDate::new(2_415_020.5).to_civil(),
            CivilDateTime::new(1900, 1, 1, 0, 0)
        );
        assert_eq!(
            JulianDate::new(2_299_160.5).to_civil(),
            CivilDateTime::new(1582, 10, 15, 0, 0)
        );
        // Meeus example 7.a: 1957 October 4.81 (Sputnik 1).
        assert_eq!(
            JulianDate::new(2_436_116.31).to_civil(),
            CivilDateTime::new(1957, 10, 4, 19, 26)
        );
    }

    #[test]
    fn dates_before_1582_are_proleptic_gregorian() {
        // Julian-calendar 1582-10-04 is Gregorian 1582-10-14.
        assert_eq!(
            JulianDate::new(2_299_159.5).to_civil(),
            CivilDateTime::new(1582, 10, 14, 0, 0)
        );
    }

    #[test]
    fn leap_day_is_resolved() {
        let civil = CivilDateTime::new(2024, 2, 29, 6, 30);
        assert_eq!(civil.to_julian_day().to_civil(), civil);
    }

    #[test]
    fn minute_rounds_to_nearest() {
        let jd = JulianDate::new(2_451_545.0) + Days::new(31.0 / 86_400.0);
        assert_eq!(jd.to_civil(), CivilDateTime::new(2000, 1, 1, 12, 1));

        let jd = JulianDate::new(2_451_545.0) + Days::new(29.0 / 86_400.0);
        assert_eq!(jd.to_civil(), CivilDateTime::new(2000, 1, 1, 12, 0));
    }

    #[test]
    fn minute_overflow_carries_into_hour() {
        // 12:59:45 → 13:00
        let jd = JulianDate::new(2_451_545.0) + Days::new((59.0 * 60.0 + 45.0) / 86_400.0);
        assert_eq!(jd.to_civil(), CivilDateTime::new(2000, 1, 1, 13, 0));
    }

    #[test]
    fn hour_overflow_carries_into_next_day() {
        // 2000-12-31 23:59:50 → 2001-01-01 00:00
        let midnight = CivilDateTime::new(2001, 1, 1, 0, 0).to_julian_day();
        let jd = midnight - Days::new(10.0 / 86_400.0);
        assert_eq!(jd.to_civil(), CivilDateTime::new(2001, 1, 1, 0, 0));
    }

    #[test]
    fn civil_roundtrip_preserves_julian_day() {
        let start = JulianDate::new(2_305_447.5);
        for step in 0..2_000_i32 {
            // Minute-aligned samples spread over ~700 years.
            let jd = start + Days::new(f64::from(step) * 127.0 + f64::from(step % 1_440) / 1_440.0);
            let back = jd.to_civil().to_julian_day();
            assert!(
                (back - jd).abs() < Days::new(1e-6),
                "{jd} → {} → {back}",
                jd.to_civil()
            );
        }
    }

    #[test]
    fn to_utc_builds_second_zero() {
        let civil = CivilDateTime::new(2015, 3, 20, 22, 45);
        assert_eq!(
            civil.to_utc().unwrap(),
            Utc.with_ymd_and_hms(2015, 3, 20, 22, 45, 0).unwrap()
        );
    }

    #[test]
    fn to_utc_propagates_out_of_range() {
        let civil = CivilDateTime::new(300_000, 3, 20, 0, 0);
        assert_eq!(
            civil.to_utc(),
            Err(SeasonError::UnrepresentableDate {
                year: 300_000,
                month: 3,
                day: 20
            })
        );
    }

    #[test]
    fn from_utc_discards_seconds() {
        let dt = Utc.with_ymd_and_hms(2021, 6, 21, 3, 32, 59).unwrap();
        assert_eq!(
            CivilDateTime::from_utc(dt),
            CivilDateTime::new(2021, 6, 21, 3, 32)
        );
    }

    #[test]
    fn display_is_iso_like() {
        let civil = CivilDateTime::new(2015, 12, 22, 4, 48);
        assert_eq!(civil.to_string(), "2015-12-22 04:48");
    }
}
