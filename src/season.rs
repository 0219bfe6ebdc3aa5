// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-relative season names and their hemisphere-dependent mapping.
//!
//! "Vernal equinox" is the March equinox for a northern observer but the
//! September one for a southern observer.  [`Season::event_kind`] resolves
//! that swap; everything else delegates to [`compute_event`].

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SeasonError;
use super::event::{compute_event, EventKind};
use super::hemisphere::{Hemisphere, HemisphereSource};

/// The four seasonal events as an observer names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    VernalEquinox,
    SummerSolstice,
    AutumnalEquinox,
    WinterSolstice,
}

impl Season {
    /// All four seasons in the order they begin.
    pub const ALL: [Self; 4] = [
        Self::VernalEquinox,
        Self::SummerSolstice,
        Self::AutumnalEquinox,
        Self::WinterSolstice,
    ];

    /// Lower-case English name, e.g. `"vernal equinox"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VernalEquinox => "vernal equinox",
            Self::SummerSolstice => "summer solstice",
            Self::AutumnalEquinox => "autumnal equinox",
            Self::WinterSolstice => "winter solstice",
        }
    }

    /// Astronomical event that starts this season in `hemisphere`.
    pub const fn event_kind(self, hemisphere: Hemisphere) -> EventKind {
        use EventKind::*;
        match (self, hemisphere) {
            (Self::VernalEquinox, Hemisphere::Northern) => NorthwardEquinox,
            (Self::VernalEquinox, Hemisphere::Southern) => SouthwardEquinox,
            (Self::SummerSolstice, Hemisphere::Northern) => NorthernSolstice,
            (Self::SummerSolstice, Hemisphere::Southern) => SouthernSolstice,
            (Self::AutumnalEquinox, Hemisphere::Northern) => SouthwardEquinox,
            (Self::AutumnalEquinox, Hemisphere::Southern) => NorthwardEquinox,
            (Self::WinterSolstice, Hemisphere::Northern) => SouthernSolstice,
            (Self::WinterSolstice, Hemisphere::Southern) => NorthernSolstice,
        }
    }

    /// Instant this season begins in the civil `year`.
    pub fn compute(self, year: i32, hemisphere: Hemisphere) -> Result<DateTime<Utc>, SeasonError> {
        let kind = self.event_kind(hemisphere);
        debug!(season = %self, ?hemisphere, event = %kind, year = year, "resolved season");
        compute_event(year, kind)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All four seasons of `year` for `hemisphere`, in [`Season::ALL`] order.
///
/// For a southern observer the vernal and autumnal entries swap months, so
/// the instants are not chronological there.
pub fn seasons_of_year(
    year: i32,
    hemisphere: Hemisphere,
) -> Result<[(Season, DateTime<Utc>); 4], SeasonError> {
    let [a, b, c, d] = Season::ALL;
    Ok([
        (a, a.compute(year, hemisphere)?),
        (b, b.compute(year, hemisphere)?),
        (c, c.compute(year, hemisphere)?),
        (d, d.compute(year, hemisphere)?),
    ])
}

/// Season lookups that ask a [`HemisphereSource`] on every call.
///
/// Nothing is cached: if the source's answer changes between calls (the
/// device crossed the equator), the next lookup follows it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalCalendar<H> {
    source: H,
}

impl<H: HemisphereSource> SeasonalCalendar<H> {
    /// Wrap a hemisphere source.
    pub const fn new(source: H) -> Self {
        Self { source }
    }

    /// Current answer of the underlying source.
    pub fn hemisphere(&self) -> Hemisphere {
        self.source.hemisphere()
    }

    /// Start of `season` in `year` for the source's current hemisphere.
    pub fn season(&self, season: Season, year: i32) -> Result<DateTime<Utc>, SeasonError> {
        season.compute(year, self.source.hemisphere())
    }

    /// Start of spring in `year`.
    pub fn vernal_equinox(&self, year: i32) -> Result<DateTime<Utc>, SeasonError> {
        self.season(Season::VernalEquinox, year)
    }

    /// Start of summer in `year`.
    pub fn summer_solstice(&self, year: i32) -> Result<DateTime<Utc>, SeasonError> {
        self.season(Season::SummerSolstice, year)
    }

    /// Start of autumn in `year`.
    pub fn autumnal_equinox(&self, year: i32) -> Result<DateTime<Utc>, SeasonError> {
        self.season(Season::AutumnalEquinox, year)
    }

    /// Start of winter in `year`.
    pub fn winter_solstice(&self, year: i32) -> Result<DateTime<Utc>, SeasonError> {
        self.season(Season::WinterSolstice, year)
    }

    /// Minute-floored instant halfway between `a` and `b`.
    ///
    /// See [`midpoint`](super::midpoint()).
    pub fn midpoint(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
        super::midpoint::midpoint(a, b)
    }
}
