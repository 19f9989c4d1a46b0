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

use super::{Duration, Timestamp};
use crate::errors::{SequenceSnafu, SiderealError};
use crate::na::Matrix3;
use rayon::prelude::*;
use snafu::prelude::*;
use std::iter::FusedIterator;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SequenceError {
    #[snafu(display("an evenly spaced sequence needs at least two points, got {num}"))]
    TooFewPoints { num: usize },
    #[snafu(display("step must be strictly positive, got {step}"))]
    NonPositiveStep { step: Duration },
}

/// A finite sequence of timestamps evenly spaced in UTC Julian Date.
///
/// Each element is rebuilt from its Julian Date when it is yielded, so the series itself is cheap to keep and can
/// be iterated as many times as needed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimestampSeries {
    start: Timestamp,
    /// Forced last element, if any
    end: Option<Timestamp>,
    step_days: f64,
    len: usize,
}

impl TimestampSeries {
    /// `num` timestamps from `start` to `end`, both included.
    pub fn linspace(start: Timestamp, end: Timestamp, num: usize) -> Result<Self, SequenceError> {
        ensure!(num >= 2, TooFewPointsSnafu { num });
        let step_days = (end.jd_utc() - start.jd_utc()) / (num - 1) as f64;
        debug!("linspace of {num} timestamps from {start} to {end}");
        Ok(Self {
            start,
            end: Some(end),
            step_days,
            len: num,
        })
    }

    /// Timestamps from `start` by increments of `step`, stopping before `end`.
    ///
    /// The number of elements is the whole number of steps in the elapsed UTC time between both ends, and zero
    /// if `end` is not after `start`.
    pub fn arange(start: Timestamp, end: Timestamp, step: Duration) -> Result<Self, SequenceError> {
        let step_ns = step.total_nanoseconds();
        ensure!(step_ns > 0, NonPositiveStepSnafu { step });
        let span_ns = (end - start).total_nanoseconds();
        let len = if span_ns > 0 {
            (span_ns / step_ns) as usize
        } else {
            0
        };
        debug!("arange of {len} timestamps from {start} to {end} by {step}");
        Ok(Self {
            start,
            end: None,
            step_days: step.total_days(),
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// UTC Julian Date of the `index`-th element.
    pub fn jd_utc(&self, index: usize) -> f64 {
        self.start.jd_utc() + index as f64 * self.step_days
    }

    /// Builds the `index`-th element, or None past the end of the series.
    pub fn get(&self, index: usize) -> Option<Result<Timestamp, SiderealError>> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return Some(Ok(self.start));
        }
        if let Some(end) = self.end {
            if index == self.len - 1 {
                return Some(Ok(end));
            }
        }
        Some(Timestamp::from_jd_utc(self.jd_utc(index)))
    }

    pub fn iter(&self) -> TimestampIter {
        TimestampIter {
            series: *self,
            next: 0,
        }
    }

    /// Builds every element in parallel, preserving their order.
    pub fn par_collect(&self) -> Result<Vec<Timestamp>, SiderealError> {
        (0..self.len)
            .into_par_iter()
            .filter_map(|index| self.get(index))
            .collect()
    }
}

impl IntoIterator for TimestampSeries {
    type Item = Result<Timestamp, SiderealError>;
    type IntoIter = TimestampIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [TimestampSeries].
#[derive(Clone, Debug)]
pub struct TimestampIter {
    series: TimestampSeries,
    next: usize,
}

impl Iterator for TimestampIter {
    type Item = Result<Timestamp, SiderealError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.series.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimestampIter {}
impl FusedIterator for TimestampIter {}

/// Returns `num` timestamps evenly spaced in UTC Julian Date from `start` to `end`, both included.
pub fn timestamp_linspace(
    start: Timestamp,
    end: Timestamp,
    num: usize,
) -> Result<Vec<Timestamp>, SiderealError> {
    TimestampSeries::linspace(start, end, num)
        .context(SequenceSnafu)?
        .par_collect()
}

/// Returns the timestamps from `start`, advancing by `step`, strictly before `end`.
pub fn timestamp_arange(
    start: Timestamp,
    end: Timestamp,
    step: Duration,
) -> Result<Vec<Timestamp>, SiderealError> {
    TimestampSeries::arange(start, end, step)
        .context(SequenceSnafu)?
        .par_collect()
}

/// ITRF to J2000 rotation of each timestamp, in the same order.
pub fn itrf_to_j2000_batch(timestamps: &[Timestamp]) -> Vec<Matrix3<f64>> {
    timestamps.par_iter().map(|ts| ts.itrf_to_j2000()).collect()
}

/// J2000 to ITRF rotation of each timestamp, in the same order.
pub fn j2000_to_itrf_batch(timestamps: &[Timestamp]) -> Vec<Matrix3<f64>> {
    timestamps.par_iter().map(|ts| ts.j2000_to_itrf()).collect()
}

/// Greenwich Apparent Sidereal Time of each timestamp, in radians.
pub fn gast_batch(timestamps: &[Timestamp]) -> Vec<f64> {
    timestamps.par_iter().map(|ts| ts.gast()).collect()
}
