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

use super::calendar::{
    jd_to_calendar, CalendarDate, FieldOutOfRangeSnafu, OverflowSnafu, UnsupportedAritySnafu,
};
use super::{Duration, DAYS_PER_CENTURY, J2000_JD, MJD_OFFSET, SECONDS_PER_DAY, TT_MINUS_TAI};
use crate::cosmic::{self, DelaunayArguments, FrameTransforms};
use crate::errors::{CalendarSnafu, SiderealError};
use crate::io::{ConfigError, ConfigRepr, Configurable};
use crate::na::Matrix3;
use crate::tables::{polar_motion, tai_minus_utc, ut1_minus_utc};
use hifitime::Epoch;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use typed_builder::TypedBuilder;

/// Named calendar fields of a [Timestamp]. The time of day defaults to midnight.
///
/// Every field is checked against its conventional range when the timestamp is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct TimestampConfig {
    pub year: i32,
    pub month: i64,
    pub day: i64,
    #[builder(default)]
    #[serde(default)]
    pub hour: i64,
    #[builder(default)]
    #[serde(default)]
    pub minute: i64,
    #[builder(default)]
    #[serde(default)]
    pub second: i64,
    #[builder(default)]
    #[serde(default)]
    pub nanosecond: i64,
}

impl ConfigRepr for TimestampConfig {}

impl From<CalendarDate> for TimestampConfig {
    fn from(date: CalendarDate) -> Self {
        Self {
            year: date.year,
            month: date.month.into(),
            day: date.day.into(),
            hour: date.hour.into(),
            minute: date.minute.into(),
            second: date.second.into(),
            nanosecond: date.nanosecond.into(),
        }
    }
}

/// A UTC instant along with every time scale, sidereal angle, and J2000 to ITRF rotation derived from it.
///
/// All of the derived quantities are computed once, when the timestamp is built, and never change afterwards.
/// Arithmetic always returns a new timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timestamp {
    date: CalendarDate,
    jd_utc: f64,
    jd_ut1: f64,
    jd_tai: f64,
    jd_tt: f64,
    tai_minus_utc: f64,
    ut1_minus_utc: f64,
    centuries_tt: f64,
    delaunay: DelaunayArguments,
    mean_obliquity: f64,
    delta_psi: f64,
    delta_eps: f64,
    gmst: f64,
    gast: f64,
    x_p: f64,
    y_p: f64,
    transforms: FrameTransforms,
}

impl Timestamp {
    /// Initializes a timestamp at midnight UTC of the provided date.
    pub fn from_ymd(year: i32, month: i64, day: i64) -> Result<Self, SiderealError> {
        Self::from_gregorian(year, month, day, 0, 0, 0, 0)
    }

    /// Initializes a timestamp from UTC calendar fields, failing if any of them is out of its conventional range.
    pub fn from_gregorian(
        year: i32,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
    ) -> Result<Self, SiderealError> {
        let date = CalendarDate::try_new(year, month, day, hour, minute, second, nanosecond)
            .context(CalendarSnafu)?;
        Self::from_calendar(date)
    }

    /// Initializes a timestamp from 3 to 7 leading calendar fields (year, month, day, then optionally hour, minute,
    /// second, and nanosecond). Missing trailing fields are zero.
    pub fn from_fields(fields: &[i64]) -> Result<Self, SiderealError> {
        if !(3..=7).contains(&fields.len()) {
            return UnsupportedAritySnafu {
                count: fields.len(),
            }
            .fail()
            .context(CalendarSnafu);
        }
        let mut padded = [0_i64; 7];
        padded[..fields.len()].copy_from_slice(fields);
        let [year, month, day, hour, minute, second, nanosecond] = padded;

        let year = i32::try_from(year)
            .ok()
            .context(FieldOutOfRangeSnafu {
                field: "year",
                value: year,
                min: i32::MIN as i64,
                max: i32::MAX as i64,
            })
            .context(CalendarSnafu)?;

        Self::from_gregorian(year, month, day, hour, minute, second, nanosecond)
    }

    /// Builds a timestamp from a calendar date, rejecting any field outside of its conventional range.
    pub fn from_calendar(date: CalendarDate) -> Result<Self, SiderealError> {
        date.validate().context(CalendarSnafu)?;
        let jd_utc = date.to_jd();
        let mjd_utc = jd_utc - MJD_OFFSET;

        let tai_minus_utc = tai_minus_utc(jd_utc);
        let ut1_minus_utc = ut1_minus_utc(mjd_utc)?;
        let (x_p, y_p) = polar_motion(mjd_utc)?;

        let jd_ut1 = jd_utc + ut1_minus_utc / SECONDS_PER_DAY;
        let jd_tai = jd_utc + tai_minus_utc / SECONDS_PER_DAY;
        let jd_tt = jd_tai + TT_MINUS_TAI / SECONDS_PER_DAY;
        let centuries_tt = (jd_tt - J2000_JD) / DAYS_PER_CENTURY;

        let delaunay = DelaunayArguments::at(centuries_tt);
        let mean_obliquity = cosmic::mean_obliquity(centuries_tt);
        let (delta_psi, delta_eps) = cosmic::nutation_with(&delaunay, centuries_tt);

        let gmst = cosmic::gmst(jd_ut1);
        let gast = cosmic::gast(gmst, delta_psi, mean_obliquity, delaunay.omega);

        let transforms = FrameTransforms::compute(
            centuries_tt,
            mean_obliquity,
            delta_psi,
            delta_eps,
            gmst,
            x_p,
            y_p,
        );

        trace!("{date}: JD UTC {jd_utc}, UT1-UTC {ut1_minus_utc} s, TAI-UTC {tai_minus_utc} s");

        Ok(Self {
            date,
            jd_utc,
            jd_ut1,
            jd_tai,
            jd_tt,
            tai_minus_utc,
            ut1_minus_utc,
            centuries_tt,
            delaunay,
            mean_obliquity,
            delta_psi,
            delta_eps,
            gmst,
            gast,
            x_p,
            y_p,
            transforms,
        })
    }

    /// Rebuilds a timestamp from a UTC Julian Date, rounded to the nearest nanosecond of the UTC calendar.
    pub fn from_jd_utc(jd_utc: f64) -> Result<Self, SiderealError> {
        Self::from_calendar(jd_to_calendar(jd_utc))
    }

    /// Rebuilds a timestamp from a UTC Modified Julian Date.
    pub fn from_mjd_utc(mjd_utc: f64) -> Result<Self, SiderealError> {
        Self::from_jd_utc(mjd_utc + MJD_OFFSET)
    }

    /// Builds a timestamp from the UTC calendar representation of a hifitime epoch.
    pub fn from_epoch(epoch: Epoch) -> Result<Self, SiderealError> {
        let (year, month, day, hour, minute, second, nanosecond) = epoch.to_gregorian_utc();
        Self::from_gregorian(
            year,
            month.into(),
            day.into(),
            hour.into(),
            minute.into(),
            second.into(),
            nanosecond.into(),
        )
    }

    /// Reads the system clock.
    pub fn now() -> Result<Self, SiderealError> {
        let epoch = Epoch::now().map_err(|e| SiderealError::SystemClock {
            details: e.to_string(),
        })?;
        Self::from_epoch(epoch)
    }

    /// Adds each component of the duration to the matching calendar field, normalizes the result, and recomputes
    /// everything from it.
    ///
    /// Leap seconds are not inserted by this calendar arithmetic: a warning is logged when TAI - UTC differs
    /// between both ends.
    pub fn checked_add(&self, duration: Duration) -> Result<Self, SiderealError> {
        self.shifted(duration, i64::checked_add)
    }

    /// Subtracts each component of the duration from the matching calendar field, cf. [Timestamp::checked_add].
    pub fn checked_sub(&self, duration: Duration) -> Result<Self, SiderealError> {
        self.shifted(duration, i64::checked_sub)
    }

    fn shifted(
        &self,
        duration: Duration,
        combine: fn(i64, i64) -> Option<i64>,
    ) -> Result<Self, SiderealError> {
        let carry = |field: &'static str, base: i64, delta: i64| {
            combine(base, delta)
                .context(OverflowSnafu { field })
                .context(CalendarSnafu)
        };
        let date = CalendarDate::normalized(
            carry("year", self.date.year.into(), duration.years)?,
            carry("month", self.date.month.into(), duration.months)?,
            carry("day", self.date.day.into(), duration.days)?,
            carry("hour", self.date.hour.into(), duration.hours)?,
            carry("minute", self.date.minute.into(), duration.minutes)?,
            carry("second", self.date.second.into(), duration.seconds)?,
            carry("nanosecond", self.date.nanosecond.into(), duration.nanoseconds)?,
        )
        .context(CalendarSnafu)?;
        let shifted = Self::from_calendar(date)?;
        if shifted.crosses_leap_second(self) {
            warn!(
                "{self} -> {shifted} crosses a leap second (TAI-UTC {} s -> {} s): it is not counted",
                self.tai_minus_utc, shifted.tai_minus_utc
            );
        }
        Ok(shifted)
    }

    /// Whether TAI - UTC differs between both timestamps, i.e. a leap second was inserted in between.
    pub fn crosses_leap_second(&self, other: &Self) -> bool {
        self.tai_minus_utc != other.tai_minus_utc
    }

    /// Elapsed time on the UTC calendar from `other` to `self`, leap seconds excluded.
    pub fn duration_since(&self, other: &Self) -> Duration {
        Duration::from_total_nanoseconds(self.date.nanoseconds_since(&other.date))
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year
    }

    pub fn month(&self) -> u8 {
        self.date.month
    }

    pub fn day(&self) -> u8 {
        self.date.day
    }

    pub fn hour(&self) -> u8 {
        self.date.hour
    }

    pub fn minute(&self) -> u8 {
        self.date.minute
    }

    pub fn second(&self) -> u8 {
        self.date.second
    }

    pub fn nanosecond(&self) -> u32 {
        self.date.nanosecond
    }

    pub fn jd_utc(&self) -> f64 {
        self.jd_utc
    }

    pub fn mjd_utc(&self) -> f64 {
        self.jd_utc - MJD_OFFSET
    }

    pub fn jd_ut1(&self) -> f64 {
        self.jd_ut1
    }

    pub fn mjd_ut1(&self) -> f64 {
        self.jd_ut1 - MJD_OFFSET
    }

    pub fn jd_tai(&self) -> f64 {
        self.jd_tai
    }

    pub fn mjd_tai(&self) -> f64 {
        self.jd_tai - MJD_OFFSET
    }

    pub fn jd_tt(&self) -> f64 {
        self.jd_tt
    }

    pub fn mjd_tt(&self) -> f64 {
        self.jd_tt - MJD_OFFSET
    }

    /// TAI - UTC, in seconds
    pub fn tai_minus_utc(&self) -> f64 {
        self.tai_minus_utc
    }

    /// UT1 - UTC, in seconds
    pub fn ut1_minus_utc(&self) -> f64 {
        self.ut1_minus_utc
    }

    /// Julian centuries of TT since J2000.0
    pub fn centuries_tt(&self) -> f64 {
        self.centuries_tt
    }

    pub fn delaunay(&self) -> DelaunayArguments {
        self.delaunay
    }

    /// Mean obliquity of the ecliptic, in radians
    pub fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// Nutation in longitude, in radians
    pub fn delta_psi(&self) -> f64 {
        self.delta_psi
    }

    /// Nutation in obliquity, in radians
    pub fn delta_eps(&self) -> f64 {
        self.delta_eps
    }

    /// Greenwich Mean Sidereal Time, in radians
    pub fn gmst(&self) -> f64 {
        self.gmst
    }

    /// Greenwich Apparent Sidereal Time, in radians
    pub fn gast(&self) -> f64 {
        self.gast
    }

    /// GAST - GMST, in radians
    pub fn equation_of_equinoxes(&self) -> f64 {
        self.gast - self.gmst
    }

    /// Pole coordinates (x, y), in arcseconds
    pub fn polar_motion(&self) -> (f64, f64) {
        (self.x_p, self.y_p)
    }

    pub fn transforms(&self) -> &FrameTransforms {
        &self.transforms
    }

    pub fn j2000_to_mod(&self) -> Matrix3<f64> {
        self.transforms.j2000_to_mod
    }

    pub fn mod_to_tod(&self) -> Matrix3<f64> {
        self.transforms.mod_to_tod
    }

    pub fn tod_to_teme(&self) -> Matrix3<f64> {
        self.transforms.tod_to_teme
    }

    pub fn teme_to_gtod(&self) -> Matrix3<f64> {
        self.transforms.teme_to_gtod
    }

    pub fn gtod_to_itrf(&self) -> Matrix3<f64> {
        self.transforms.gtod_to_itrf
    }

    pub fn earth_rotation(&self) -> Matrix3<f64> {
        self.transforms.earth_rotation()
    }

    pub fn j2000_to_itrf(&self) -> Matrix3<f64> {
        self.transforms.j2000_to_itrf()
    }

    pub fn itrf_to_j2000(&self) -> Matrix3<f64> {
        self.transforms.itrf_to_j2000()
    }
}

impl TryFrom<TimestampConfig> for Timestamp {
    type Error = SiderealError;

    fn try_from(cfg: TimestampConfig) -> Result<Self, Self::Error> {
        Self::from_gregorian(
            cfg.year,
            cfg.month,
            cfg.day,
            cfg.hour,
            cfg.minute,
            cfg.second,
            cfg.nanosecond,
        )
    }
}

impl Configurable for Timestamp {
    type IntermediateRepr = TimestampConfig;

    fn from_config(cfg: Self::IntermediateRepr) -> Result<Self, ConfigError> {
        Ok(Self::try_from(cfg)?)
    }

    fn to_config(&self) -> Result<Self::IntermediateRepr, ConfigError> {
        Ok(self.date.into())
    }
}

impl From<Timestamp> for Epoch {
    fn from(ts: Timestamp) -> Self {
        let date = ts.date;
        Epoch::from_gregorian_utc(
            date.year,
            date.month,
            date.day,
            date.hour,
            date.minute,
            date.second,
            date.nanosecond,
        )
    }
}

impl Add<Duration> for Timestamp {
    type Output = Result<Self, SiderealError>;

    fn add(self, duration: Duration) -> Self::Output {
        self.checked_add(duration)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Result<Self, SiderealError>;

    fn sub(self, duration: Duration) -> Self::Output {
        self.checked_sub(duration)
    }
}

impl Sub for Timestamp {
    type Output = Duration;

    fn sub(self, other: Self) -> Self::Output {
        self.duration_since(&other)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.date.nanoseconds_since(&other.date).cmp(&0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} UTC", self.date)
    }
}
