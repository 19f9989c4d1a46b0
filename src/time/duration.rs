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
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Mean length of a year, in days, used to convert the year component into seconds.
pub const DAYS_PER_YEAR: f64 = 365.25;
/// Length of a month, in days, used to convert the month component into seconds.
pub const DAYS_PER_MONTH: f64 = 31.0;

const SECONDS_PER_YEAR: i128 = 31_557_600;
const SECONDS_PER_MONTH: i128 = 31 * 86_400;

/// A signed offset expressed in calendar components.
///
/// Components are kept as provided: adding a duration to a [Timestamp](super::Timestamp) adds each component to
/// the matching calendar field before normalizing. Only [Duration::total_seconds] and
/// [Duration::total_nanoseconds] collapse the components, with years of 365.25 days and months of 31 days. That
/// is an approximation, not calendar arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: i64,
}

impl Duration {
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanoseconds: 0,
    };

    pub const fn new(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanoseconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds,
        }
    }

    pub const fn from_years(years: i64) -> Self {
        Self::new(years, 0, 0, 0, 0, 0, 0)
    }

    pub const fn from_months(months: i64) -> Self {
        Self::new(0, months, 0, 0, 0, 0, 0)
    }

    pub const fn from_days(days: i64) -> Self {
        Self::new(0, 0, days, 0, 0, 0, 0)
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::new(0, 0, 0, hours, 0, 0, 0)
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self::new(0, 0, 0, 0, minutes, 0, 0)
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new(0, 0, 0, 0, 0, seconds, 0)
    }

    /// Splits a floating point number of seconds into whole seconds and nanoseconds, rounded to the nearest
    /// nanosecond. Both parts share the sign of the input.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        let whole = seconds.trunc();
        let nanoseconds = ((seconds - whole) * NANOSECONDS_PER_SECOND as f64).round() as i64;
        Self::new(0, 0, 0, 0, 0, whole as i64, 0) + Self::new(0, 0, 0, 0, 0, 0, nanoseconds)
    }

    /// Breaks down a number of nanoseconds into days, hours, minutes, seconds, and nanoseconds, all of the same
    /// sign. Years and months are always zero.
    pub fn from_total_nanoseconds(nanoseconds: i128) -> Self {
        let sign = if nanoseconds < 0 { -1 } else { 1 };
        let abs = nanoseconds.unsigned_abs();
        let ns_per_day = NANOSECONDS_PER_DAY as u128;
        let ns_per_s = NANOSECONDS_PER_SECOND as u128;

        let days = abs / ns_per_day;
        let rem = abs % ns_per_day;
        let hours = rem / (3_600 * ns_per_s);
        let rem = rem % (3_600 * ns_per_s);
        let minutes = rem / (60 * ns_per_s);
        let rem = rem % (60 * ns_per_s);
        let seconds = rem / ns_per_s;
        let nanos = rem % ns_per_s;

        Self::new(
            0,
            0,
            sign * days as i64,
            sign * hours as i64,
            sign * minutes as i64,
            sign * seconds as i64,
            sign * nanos as i64,
        )
    }

    /// Total length in seconds, with years of 365.25 days and months of 31 days.
    pub fn total_seconds(&self) -> f64 {
        self.years as f64 * DAYS_PER_YEAR * SECONDS_PER_DAY
            + self.months as f64 * DAYS_PER_MONTH * SECONDS_PER_DAY
            + self.days as f64 * SECONDS_PER_DAY
            + self.hours as f64 * 3_600.0
            + self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.nanoseconds as f64 / NANOSECONDS_PER_SECOND as f64
    }

    /// Exact total length in nanoseconds, with the same year and month lengths as [Self::total_seconds].
    pub fn total_nanoseconds(&self) -> i128 {
        let seconds = self.years as i128 * SECONDS_PER_YEAR
            + self.months as i128 * SECONDS_PER_MONTH
            + self.days as i128 * 86_400
            + self.hours as i128 * 3_600
            + self.minutes as i128 * 60
            + self.seconds as i128;
        seconds * NANOSECONDS_PER_SECOND as i128 + self.nanoseconds as i128
    }

    /// Total length in days, as used to step through Julian Dates.
    pub fn total_days(&self) -> f64 {
        self.total_seconds() / SECONDS_PER_DAY
    }

    pub fn is_zero(&self) -> bool {
        self.total_nanoseconds() == 0
    }

    pub fn is_negative(&self) -> bool {
        self.total_nanoseconds() < 0
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.years + rhs.years,
            self.months + rhs.months,
            self.days + rhs.days,
            self.hours + rhs.hours,
            self.minutes + rhs.minutes,
            self.seconds + rhs.seconds,
            self.nanoseconds + rhs.nanoseconds,
        )
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self::new(
            self.years * rhs,
            self.months * rhs,
            self.days * rhs,
            self.hours * rhs,
            self.minutes * rhs,
            self.seconds * rhs,
            self.nanoseconds * rhs,
        )
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}Y {}M {}D {}h {}m {}s {}ns",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds, self.nanoseconds
        )
    }
}

impl From<hifitime::Duration> for Duration {
    fn from(duration: hifitime::Duration) -> Self {
        Self::from_total_nanoseconds(duration.total_nanoseconds())
    }
}

impl From<Duration> for hifitime::Duration {
    fn from(duration: Duration) -> Self {
        hifitime::Duration::from_total_nanoseconds(duration.total_nanoseconds())
    }
}
