// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Seasons
//!
//! Instants of the equinoxes and solstices of any year, computed with the
//! seasonal algorithm of Jean Meeus (*Astronomical Algorithms*, ch. 27), and a
//! minute-truncated midpoint helper.
//!
//! # Core types
//!
//! - [`EventKind`] — the four astronomically absolute events (northward
//!   equinox, northern solstice, …).
//! - [`Season`] — the four events as an observer names them (vernal equinox,
//!   summer solstice, …); which [`EventKind`] they map to depends on the
//!   [`Hemisphere`].
//! - [`HemisphereSource`] / [`SeasonalCalendar`] — plug in a location lookup
//!   that is queried on every call.
//! - [`CivilDateTime`] — minute-resolution proleptic Gregorian fields with
//!   Julian Day conversions in both directions.
//! - [`Time<S>`] — a day count tagged with a [`TimeScale`] marker
//!   ([`JD`] civil, [`JDE`] ephemeris).
//!
//! # Quick example
//!
//! ```rust
//! use seasons::{vernal_equinox, winter_solstice, Hemisphere};
//!
//! // March equinox for a northern observer …
//! let march = vernal_equinox(2020, Hemisphere::Northern)?;
//! assert_eq!(march.to_rfc3339(), "2020-03-20T03:50:00+00:00");
//!
//! // … is the start of autumn down south, whose winter begins in June.
//! let june = winter_solstice(2024, Hemisphere::Southern)?;
//! assert_eq!(june.to_rfc3339(), "2024-06-20T20:51:00+00:00");
//! # Ok::<(), seasons::SeasonError>(())
//! ```
//!
//! All instants are UTC.  No step of the computation fails for any `i32`
//! year; only turning the result into a `chrono::DateTime<Utc>` can, for
//! dates beyond chrono's range.

mod calendar;
mod delta_t;
mod error;
mod event;
mod hemisphere;
pub(crate) mod instant;
mod midpoint;
pub(crate) mod scales;
mod season;

use chrono::{DateTime, Utc};

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CivilDateTime;
pub use error::SeasonError;
pub use event::{compute_event, EventKind};
pub use hemisphere::{Hemisphere, HemisphereSource};
pub use instant::{Time, TimeScale};
pub use midpoint::midpoint;
pub use scales::{JD, JDE};
pub use season::{seasons_of_year, Season, SeasonalCalendar};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date on the civil axis.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day on the uniform axis.
///
/// This is a type alias for [`Time<JDE>`].
pub type JulianEphemerisDay = Time<JDE>;

// ── Named seasons ─────────────────────────────────────────────────────────

/// Start of spring: the March equinox in the north, September in the south.
pub fn vernal_equinox(year: i32, hemisphere: Hemisphere) -> Result<DateTime<Utc>, SeasonError> {
    Season::VernalEquinox.compute(year, hemisphere)
}

/// Start of summer: the June solstice in the north, December in the south.
pub fn summer_solstice(year: i32, hemisphere: Hemisphere) -> Result<DateTime<Utc>, SeasonError> {
    Season::SummerSolstice.compute(year, hemisphere)
}

/// Start of autumn: the September equinox in the north, March in the south.
pub fn autumnal_equinox(year: i32, hemisphere: Hemisphere) -> Result<DateTime<Utc>, SeasonError> {
    Season::AutumnalEquinox.compute(year, hemisphere)
}

/// Start of winter: the December solstice in the north, June in the south.
pub fn winter_solstice(year: i32, hemisphere: Hemisphere) -> Result<DateTime<Utc>, SeasonError> {
    Season::WinterSolstice.compute(year, hemisphere)
}
