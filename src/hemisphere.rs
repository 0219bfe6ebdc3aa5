// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer hemisphere and the seam through which callers supply it.
//!
//! The crate never looks up a location.  Callers either pass a
//! [`Hemisphere`] directly or hand a [`HemisphereSource`] to
//! [`SeasonalCalendar`](super::SeasonalCalendar), which asks it again on every
//! call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of the equator the observer stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    #[default]
    Northern,
    Southern,
}

impl Hemisphere {
    /// `true` selects [`Hemisphere::Southern`].
    #[inline]
    pub const fn from_is_southern(is_southern: bool) -> Self {
        if is_southern {
            Self::Southern
        } else {
            Self::Northern
        }
    }

    /// Hemisphere of a geodetic latitude in degrees.
    ///
    /// Decided by the sign bit, so `-0.0` counts as southern and the equator
    /// itself (`+0.0`) as northern.
    #[inline]
    pub fn from_latitude(latitude_degrees: f64) -> Self {
        Self::from_is_southern(latitude_degrees.is_sign_negative())
    }

    /// `true` for [`Hemisphere::Southern`].
    #[inline]
    pub const fn is_southern(self) -> bool {
        matches!(self, Self::Southern)
    }
}

/// Anything that can report the observer's current hemisphere.
///
/// Implemented for a fixed [`Hemisphere`] and for closures, so a device
/// location lookup can be plugged in as `|| Hemisphere::from_latitude(gps.lat())`.
pub trait HemisphereSource {
    /// Hemisphere the observer is in right now.
    fn hemisphere(&self) -> Hemisphere;
}

impl HemisphereSource for Hemisphere {
    #[inline]
    fn hemisphere(&self) -> Hemisphere {
        *self
    }
}

impl<F> HemisphereSource for F
where
    F: Fn() -> Hemisphere,
{
    #[inline]
    fn hemisphere(&self) -> Hemisphere {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_maps_to_hemisphere() {
        assert_eq!(Hemisphere::from_is_southern(true), Hemisphere::Southern);
        assert_eq!(Hemisphere::from_is_southern(false), Hemisphere::Northern);
        assert!(Hemisphere::Southern.is_southern());
        assert!(!Hemisphere::Northern.is_southern());
    }

    #[test]
    fn latitude_sign_decides() {
        assert_eq!(Hemisphere::from_latitude(-33.87), Hemisphere::Southern);
        assert_eq!(Hemisphere::from_latitude(51.48), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(-0.0), Hemisphere::Southern);
    }

    #[test]
    fn default_is_northern() {
        assert_eq!(Hemisphere::default(), Hemisphere::Northern);
    }

    #[test]
    fn fixed_and_closure_sources() {
        assert_eq!(Hemisphere::Southern.hemisphere(), Hemisphere::Southern);
        let latitude = -12.0;
        let source = move || Hemisphere::from_latitude(latitude);
        assert_eq!(source.hemisphere(), Hemisphere::Southern);
    }
}
