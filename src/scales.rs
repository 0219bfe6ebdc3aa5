// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Axis |
//! |--------|-------------|------|
//! | [`JD`] | Julian Date | civil (UT) |
//! | [`JDE`] | Julian Ephemeris Day | uniform (TT) |
//!
//! The two axes differ by ΔT.  There is no implicit conversion between them:
//! [`Time::<JDE>::to_universal`](super::Time::to_universal) takes ΔT as an
//! explicit argument.

use super::instant::TimeScale;

/// Julian Date on the civil axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";
}

/// Julian Ephemeris Day, the uniform day count used by ephemeris formulas.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";
}
