/*
    Sidereal, time scales and Earth orientation for astrodynamics
    Copyright (C) 2024 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Compiled-in, read-only tables: leap seconds, Earth orientation parameters, and the IAU 1980 nutation series.
//! None of these are ever mutated after initialization, so they may be read from any thread.

/// Earth orientation parameters (UT1 - UTC and polar motion).
pub mod eop;
/// TAI - UTC offsets.
pub mod leap_seconds;
/// Coefficients of the 106-term IAU 1980 nutation series.
pub mod nutation80;

pub use self::eop::{polar_motion, ut1_minus_utc, EopEntry, EopError, EopTable, EOP_TABLE};
pub use self::leap_seconds::{tai_minus_utc, LEAP_SECONDS};
pub use self::nutation80::{NutationTerm, IAU1980_NUTATION};
