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

/// Conversions between the calendar and Julian Dates.
pub mod calendar;
mod duration;
pub mod sequence;
mod timestamp;

pub use self::calendar::{calendar_to_jd, jd_to_calendar, CalendarDate, CalendarError};
pub use self::duration::Duration;
pub use self::sequence::{
    gast_batch, itrf_to_j2000_batch, j2000_to_itrf_batch, timestamp_arange, timestamp_linspace,
    SequenceError, TimestampSeries,
};
pub use self::timestamp::{Timestamp, TimestampConfig};

/// Julian Date of the J2000.0 reference epoch (2000 January 01, 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;
/// Offset between the Julian Date and the Modified Julian Date
pub const MJD_OFFSET: f64 = 2_400_000.5;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// TT - TAI, in seconds
pub const TT_MINUS_TAI: f64 = 32.184;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;
pub const NANOSECONDS_PER_DAY: i64 = 86_400 * NANOSECONDS_PER_SECOND;
