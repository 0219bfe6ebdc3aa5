// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scale-tagged Julian day counts.
//!
//! [`Time<S>`] stores a single [`Days`] quantity whose meaning is fixed by the
//! compile-time marker `S: TimeScale`.  The seasonal computation works on the
//! uniform ephemeris axis ([`JDE`](super::JDE)) and only drops to the civil
//! axis ([`JD`](super::JD)) once the ΔT correction has been applied, so the
//! two can never be mixed up by accident.
//!
//! Methods that only make sense on one axis live in inherent `impl` blocks
//! gated on the concrete marker.

use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar::CivilDateTime;
use super::scales::{JD, JDE};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for the day-count axes used by this crate.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A day count on time scale `S`.
///
/// `PhantomData` is zero-sized, so `Time<S>` is layout-identical to a single
/// `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }
}

// ── Ephemeris axis ────────────────────────────────────────────────────────

impl Time<JDE> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JDE 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Drops onto the civil axis by subtracting `ΔT = TT − UT`.
    #[inline]
    pub fn to_universal(self, delta_t: Seconds) -> Time<JD> {
        Time::<JD>::from_days(self.quantity - delta_t.to::<Day>())
    }
}

// ── Civil axis ────────────────────────────────────────────────────────────

impl Time<JD> {
    /// Split into civil fields at minute resolution.
    ///
    /// See [`CivilDateTime::from_julian_day`].
    #[inline]
    pub fn to_civil(&self) -> CivilDateTime {
        CivilDateTime::from_julian_day(*self)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_centuries_from_j2000() {
        let jde = Time::<JDE>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jde.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
        assert_eq!(Time::<JDE>::J2000.julian_centuries(), Centuries::new(0.0));
    }

    #[test]
    fn to_universal_subtracts_delta_t() {
        let jde = Time::<JDE>::new(2_460_000.0);
        let jd = jde.to_universal(Seconds::new(86_400.0));
        assert!((jd.quantity() - Days::new(2_459_999.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn to_civil_splits_civil_axis() {
        let jd = Time::<JD>::new(2_451_545.0) + Days::new(0.25);
        assert_eq!(jd.to_civil(), CivilDateTime::new(2000, 1, 1, 18, 0));
    }

    #[test]
    fn arithmetic_on_days() {
        let jd = Time::<JD>::new(2_451_545.5);
        assert_eq!((jd + Days::new(0.5)) - jd, Days::new(0.5));
        assert_eq!((jd - Days::new(0.5)).value(), 2_451_545.0);
    }

    #[test]
    fn display_uses_scale_label() {
        assert!(format!("{}", Time::<JD>::new(2_451_545.0)).starts_with("JD "));
        assert!(format!("{}", Time::<JDE>::new(2_451_545.0)).starts_with("JDE "));
    }
}
