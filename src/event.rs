// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Equinoxes and solstices
//!
//! Instants of the four solar seasonal events from Chapter 27 of
//! *Jean Meeus — Astronomical Algorithms (2nd ed. 1998)*.
//!
//! 1. A quartic in `t = (year − 2000) / 1000` gives the mean event `JDE₀`
//!    (tables 27.A/27.B, here only the 1000–3000 CE set).
//! 2. Twenty-four periodic terms `S` (table 27.C), damped by `Δλ`, refine it:
//!    `JDE = JDE₀ + 0.00001·S / Δλ`.
//! 3. The linear ΔT estimate moves the result onto the civil axis, which is
//!    then split into civil fields at minute resolution.
//!
//! Accuracy is around a minute for 1951–2050 and degrades slowly outside
//! 1000–3000 CE.  Years are never rejected.
//!
//! ```rust
//! use seasons::{compute_event, EventKind};
//!
//! let equinox = compute_event(2015, EventKind::NorthwardEquinox)?;
//! assert_eq!(equinox.to_rfc3339(), "2015-03-20T22:45:00+00:00");
//! # Ok::<(), seasons::SeasonError>(())
//! ```

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::delta_t::delta_t_linear;
use super::error::SeasonError;
use super::{JulianDate, JulianEphemerisDay};

/// One of the four astronomically absolute seasonal events.
///
/// Named after the Sun's motion rather than a season so that the meaning does
/// not flip between hemispheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// March equinox: the Sun crosses the celestial equator heading north.
    NorthwardEquinox,
    /// June solstice: greatest northern declination.
    NorthernSolstice,
    /// September equinox: the Sun crosses the celestial equator heading south.
    SouthwardEquinox,
    /// December solstice: greatest southern declination.
    SouthernSolstice,
}

/// Mean-event polynomial coefficients `[a, b, c, d, e]` for
/// `JDE₀ = a + b·t + c·t² + d·t³ + e·t⁴`, indexed by [`EventKind`].
/// Signs are folded into the coefficients.
#[rustfmt::skip]
const MEAN_EVENT: [[f64; 5]; 4] = [
    [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
    [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
    [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
    [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
];

/// Periodic terms `(A, B, C)` contributing `A·cos(B + C·T)`, degrees.
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1_934.136), (203.0, 337.23,  32_964.467),
    (199.0, 342.08,      20.186), (182.0,  27.85, 445_267.112),
    (156.0,  73.14,  45_036.886), (136.0, 171.52,  22_518.443),
    ( 77.0, 222.54,  65_928.934), ( 74.0, 296.72,   3_034.906),
    ( 70.0, 243.58,   9_037.513), ( 58.0, 119.81,  33_718.147),
    ( 52.0, 297.17,     150.678), ( 50.0,  21.02,   2_281.226),
    ( 45.0, 247.54,  29_929.562), ( 44.0, 325.15,  31_555.956),
    ( 29.0,  60.93,   4_443.417), ( 18.0, 155.12,  67_555.328),
    ( 17.0, 288.79,   4_562.452), ( 16.0, 198.04,  62_894.029),
    ( 14.0, 199.76,  31_436.921), ( 12.0,  95.39,  14_577.848),
    ( 12.0, 287.11,  31_931.756), ( 12.0, 320.81,  34_777.259),
    (  9.0, 227.73,   1_222.114), (  8.0,  15.45,  16_859.074),
];

impl EventKind {
    /// All four events in calendar order.
    pub const ALL: [Self; 4] = [
        Self::NorthwardEquinox,
        Self::NorthernSolstice,
        Self::SouthwardEquinox,
        Self::SouthernSolstice,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthwardEquinox => "northward equinox",
            Self::NorthernSolstice => "northern solstice",
            Self::SouthwardEquinox => "southward equinox",
            Self::SouthernSolstice => "southern solstice",
        }
    }

    /// Mean event `JDE₀` for `year`.
    pub(crate) fn mean_julian_ephemeris_day(self, year: i32) -> JulianEphemerisDay {
        let [a, b, c, d, e] = MEAN_EVENT[self as usize];
        let t = (f64::from(year) - 2000.0) / 1000.0;
        JulianEphemerisDay::new(a + b * t + c * t.powi(2) + d * t.powi(3) + e * t.powi(4))
    }

    /// Event instant on the ephemeris axis, periodic terms applied.
    pub(crate) fn julian_ephemeris_day(self, year: i32) -> JulianEphemerisDay {
        let jde0 = self.mean_julian_ephemeris_day(year);
        let t = jde0.julian_centuries().value();

        let w = (35_999.373 * t - 2.47).to_radians();
        let delta_lambda = 1.0 + 0.0334 * w.cos() + 0.0007 * (2.0 * w).cos();
        let s = periodic_sum(t);
        let correction = 0.00001 * s / delta_lambda;

        trace!(
            event = %self,
            jde0 = jde0.value(),
            s = s,
            delta_lambda = delta_lambda,
            correction = correction,
            "periodic terms applied"
        );
        JulianEphemerisDay::new(jde0.value() + correction)
    }

    /// Event instant on the civil axis.
    pub(crate) fn julian_day(self, year: i32) -> JulianDate {
        let delta_t = delta_t_linear(year);
        trace!(event = %self, year = year, delta_t = delta_t.value(), "linear ΔT");
        self.julian_ephemeris_day(year).to_universal(delta_t)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `S = Σ A·cos(B + C·T)` over [`PERIODIC_TERMS`].
fn periodic_sum(t: f64) -> f64 {
    PERIODIC_TERMS
        .iter()
        .map(|&(a, b, c)| a * (b + c * t).to_radians().cos())
        .sum()
}

/// Instant of `kind` in the civil `year`, in UTC at minute resolution.
///
/// Every `year` is accepted.  The only error is a result date that chrono
/// cannot represent (beyond roughly ±262 000 years).
#[tracing::instrument(level = "trace")]
pub fn compute_event(year: i32, kind: EventKind) -> Result<DateTime<Utc>, SeasonError> {
    kind.julian_day(year).to_civil().to_utc()
}
