// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the seasons crate.

/// Error type for the civil-calendar boundary.
///
/// The astronomical computation itself is total; only building a
/// `chrono::DateTime<Utc>` from its output can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SeasonError {
    /// Returned when a civil date is outside chrono's representable range.
    #[error("civil date {year:04}-{month:02}-{day:02} is not representable as a UTC instant")]
    UnrepresentableDate {
        /// Proleptic Gregorian year.
        year: i32,
        /// Month, 1–12.
        month: u32,
        /// Day of month, 1–31.
        day: u32,
    },
}
