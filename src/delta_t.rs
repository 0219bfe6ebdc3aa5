// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): linear secular term
//!
//! **ΔT = TT − UT** is the offset between the uniform time scale used by the
//! seasonal polynomials and civil time.  The seasonal computation uses a
//! single linear approximation anchored at 2000:
//!
//! ```text
//! ΔT(year) = 66 s + (year − 2000) · 1 s
//! ```
//!
//! ## Valid Time Range
//! This is only a fair fit near the present era.  The observed ΔT was
//! ≈ 63.8 s in 2000 and ≈ 69 s in 2020, whereas historical values reach
//! hours before 1000 CE.  The equinox and solstice reference instants in the
//! test suite are calibrated against this exact approximation, so it is a
//! known accuracy boundary and must not be swapped for a tabulated model
//! without recalibrating them.

use qtty::Seconds;

/// ΔT at the 2000.0 anchor.
const DELTA_T_2000: Seconds = Seconds::new(66.0);

/// Yearly growth of ΔT.
const DELTA_T_RATE_PER_YEAR: Seconds = Seconds::new(1.0);

/// Anchor year of the linear model.
const ANCHOR_YEAR: f64 = 2000.0;

/// Returns the linear **ΔT** estimate for a civil `year`.
///
/// Total for every `i32`: the subtraction is done in `f64` so extreme years
/// cannot overflow.
#[inline]
pub(crate) fn delta_t_linear(year: i32) -> Seconds {
    DELTA_T_2000 + DELTA_T_RATE_PER_YEAR * (f64::from(year) - ANCHOR_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::{Day, Days};

    #[test]
    fn anchor_year_is_66_seconds() {
        assert_eq!(delta_t_linear(2000), Seconds::new(66.0));
    }

    #[test]
    fn grows_one_second_per_year() {
        assert!((delta_t_linear(2025) - Seconds::new(91.0)).abs() < Seconds::new(1e-12));
        assert!((delta_t_linear(1990) - Seconds::new(56.0)).abs() < Seconds::new(1e-12));
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let low = delta_t_linear(i32::MIN);
        let high = delta_t_linear(i32::MAX);
        assert!(low.value().is_finite() && low < Seconds::new(0.0));
        assert!(high.value().is_finite() && high > Seconds::new(0.0));
    }

    #[test]
    fn converts_to_fraction_of_day() {
        let dt = delta_t_linear(2000).to::<Day>();
        assert!((dt - Days::new(66.0 / 86_400.0)).abs() < Days::new(1e-15));
    }
}
