// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Midpoint of two instants, truncated to the minute.

use chrono::{DateTime, Utc};

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_MINUTE: i64 = 60;

/// Arithmetic mean of `a` and `b`, floored to the whole minute.
///
/// Truncating rather than rounding keeps results that land near a half
/// minute from flipping between neighbours.  The mean is taken over the
/// integer sum of both timestamps, so argument order never matters.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
///
/// let a = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
/// let b = Utc.with_ymd_and_hms(2021, 1, 1, 2, 0, 0).unwrap();
/// assert_eq!(seasons::midpoint(a, b), Utc.with_ymd_and_hms(2021, 1, 1, 1, 0, 0).unwrap());
/// ```
pub fn midpoint(a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
    let mean = (total_nanos(a) + total_nanos(b)).div_euclid(2);
    let seconds = mean.div_euclid(NANOS_PER_SECOND) as i64;
    let minute = seconds - seconds.rem_euclid(SECONDS_PER_MINUTE);
    DateTime::<Utc>::from_timestamp(minute, 0)
        .expect("minute floor of a mean lies within chrono's representable range")
}

#[inline]
fn total_nanos(t: DateTime<Utc>) -> i128 {
    i128::from(t.timestamp()) * NANOS_PER_SECOND + i128::from(t.timestamp_subsec_nanos())
}
