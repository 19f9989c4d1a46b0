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

use super::{NANOSECONDS_PER_DAY, NANOSECONDS_PER_SECOND, SECONDS_PER_DAY};
use snafu::prelude::*;
use std::fmt;

/// First Julian Day Number of the Gregorian calendar (1582 October 15).
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CalendarError {
    #[snafu(display("{field} = {value} is outside of [{min}, {max}]"))]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[snafu(display("{field} overflows when adding the duration"))]
    Overflow { field: &'static str },
    #[snafu(display("expected between 3 and 7 calendar fields, got {count}"))]
    UnsupportedArity { count: usize },
}

/// A broken down UTC calendar date and time of day.
///
/// The constructors always yield normalized fields: month in 1..=12, day within the month, hour, minute and
/// second within their usual range, and the nanosecond strictly below one second. Dates assembled field by field
/// can be checked with [CalendarDate::validate].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl CalendarDate {
    /// Builds a calendar date after checking every field against its conventional range.
    pub fn try_new(
        year: i32,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> Result<Self, CalendarError> {
        check_range("month", month, 1, 12)?;
        check_range("day", day, 1, days_in_month(year as i64, month) as i64)?;
        check_range("hour", hour, 0, 23)?;
        check_range("minute", minute, 0, 59)?;
        check_range("second", second, 0, 59)?;
        check_range("nanosecond", nanosecond, 0, NANOSECONDS_PER_SECOND - 1)?;
        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            nanosecond: nanosecond as u32,
        })
    }

    /// Builds a calendar date from components which may be out of range or negative, carrying the excess of each
    /// component into the next larger one (nanoseconds into seconds, up to months into years).
    ///
    /// The carry is computed on a day count, so its cost does not depend on the magnitude of the components.
    /// Fails if the resulting year does not fit in an `i32`.
    pub fn normalized(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> Result<Self, CalendarError> {
        let nanos_per_second = NANOSECONDS_PER_SECOND as i128;
        let second = second as i128 + (nanosecond as i128).div_euclid(nanos_per_second);
        let nanosecond = (nanosecond as i128).rem_euclid(nanos_per_second);
        let minute = minute as i128 + second.div_euclid(60);
        let second = second.rem_euclid(60);
        let hour = hour as i128 + minute.div_euclid(60);
        let minute = minute.rem_euclid(60);
        let day = day as i128 + hour.div_euclid(24);
        let hour = hour.rem_euclid(24);

        let year = year as i128 + (month as i128 - 1).div_euclid(12);
        let month = (month as i128 - 1).rem_euclid(12) + 1;

        let (year, month, day) = civil_from_days(days_from_civil(year, month, 1) + day - 1);

        let year = i32::try_from(year).ok().context(FieldOutOfRangeSnafu {
            field: "year",
            value: year.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
            min: i32::MIN as i64,
            max: i32::MAX as i64,
        })?;

        Ok(Self {
            year,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            nanosecond: nanosecond as u32,
        })
    }

    /// Checks that every field is within its conventional range, as guaranteed by [CalendarDate::try_new].
    pub fn validate(&self) -> Result<(), CalendarError> {
        Self::try_new(
            self.year,
            self.month.into(),
            self.day.into(),
            self.hour.into(),
            self.minute.into(),
            self.second.into(),
            self.nanosecond.into(),
        )
        .map(|_| ())
    }

    /// Julian Date of this calendar date, cf. [calendar_to_jd].
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
        )
    }

    /// Integer Julian Day Number of the civil day (the JD at noon of that day).
    pub fn day_number(&self) -> i64 {
        (calendar_to_jd(self.year, self.month, self.day, 0, 0, 0, 0) + 0.5) as i64
    }

    /// Nanoseconds elapsed since midnight.
    pub fn nanoseconds_of_day(&self) -> i64 {
        ((self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64)
            * NANOSECONDS_PER_SECOND
            + self.nanosecond as i64
    }

    /// Nanoseconds elapsed from `other` to `self`, as counted on the UTC calendar (leap seconds are not counted).
    pub fn nanoseconds_since(&self, other: &Self) -> i128 {
        (self.day_number() - other.day_number()) as i128 * NANOSECONDS_PER_DAY as i128
            + (self.nanoseconds_of_day() - other.nanoseconds_of_day()) as i128
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), CalendarError> {
    ensure!(
        (min..=max).contains(&value),
        FieldOutOfRangeSnafu {
            field,
            value,
            min,
            max
        }
    );
    Ok(())
}

/// Days elapsed from 1970 January 01 to the provided proleptic Gregorian date, with March as the first month of
/// the computational year so that the leap day falls last.
fn days_from_civil(year: i128, month: i128, day: i128) -> i128 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Inverse of [days_from_civil], returns the (year, month, day) of a day count since 1970 January 01.
fn civil_from_days(days: i128) -> (i128, i128, i128) {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Returns whether `year` is a leap year of the proleptic Gregorian calendar.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the provided month (1-12) of the proleptic Gregorian calendar, zero if the month is invalid.
pub fn days_in_month(year: i64, month: i64) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Converts a proleptic Gregorian calendar date and time of day into a Julian Date.
///
/// January and February are treated as months 13 and 14 of the previous year, the Gregorian correction is
/// `B = floor(y/400) - floor(y/100)`, and the time of day is folded into the fractional day.
/// J2000.0, i.e. 2000 January 01 at 12:00:00, maps exactly to 2451545.0.
pub fn calendar_to_jd(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
) -> f64 {
    let (y, m) = if month <= 2 {
        (year as i64 - 1, month as i64 + 12)
    } else {
        (year as i64, month as i64)
    };
    let b = y.div_euclid(400) - y.div_euclid(100);
    let whole_days = (365.25 * y as f64).floor() + (30.6001 * (m + 1) as f64).floor() + b as f64;
    let seconds_of_day = (hour as u32 * 3600 + minute as u32 * 60 + second as u32) as f64;
    let day_fraction = seconds_of_day / SECONDS_PER_DAY + nanosecond as f64 / NANOSECONDS_PER_DAY as f64;
    whole_days + 1_720_996.5 + day as f64 + day_fraction
}

/// Converts a Julian Date back into a calendar date, rounded to the nearest nanosecond.
///
/// Day numbers from [GREGORIAN_REFORM_JDN] onward are read on the Gregorian calendar, earlier ones on the Julian
/// calendar. Round trips through [calendar_to_jd] therefore hold for Gregorian dates, to the precision of a double
/// Julian Date (tens of microseconds for contemporary dates).
pub fn jd_to_calendar(jd: f64) -> CalendarDate {
    let mut z = (jd + 0.5).floor();
    let fraction = (jd + 0.5) - z;
    let mut nanos_of_day = (fraction * NANOSECONDS_PER_DAY as f64).round() as i64;
    if nanos_of_day >= NANOSECONDS_PER_DAY {
        nanos_of_day -= NANOSECONDS_PER_DAY;
        z += 1.0;
    }

    let a = z as i64;
    let a = if a < GREGORIAN_REFORM_JDN {
        a
    } else {
        let alpha = ((a as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        a + 1 + alpha - alpha.div_euclid(4)
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    let nanosecond = nanos_of_day % NANOSECONDS_PER_SECOND;
    let total_seconds = nanos_of_day / NANOSECONDS_PER_SECOND;

    CalendarDate {
        year: year as i32,
        month: month as u8,
        day: day as u8,
        hour: (total_seconds / 3600) as u8,
        minute: ((total_seconds % 3600) / 60) as u8,
        second: (total_seconds % 60) as u8,
        nanosecond: nanosecond as u32,
    }
}
