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

use snafu::prelude::*;

/// Version of the compiled-in Earth orientation series.
pub const EOP_VERSION: &str = "semi-annual UT1-UTC and pole anchors, 2000-01-01 to 2028-01-01";

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EopError {
    #[snafu(display("MJD {mjd} is outside of the EOP table span [{first_mjd}, {last_mjd}]"))]
    OutOfRange {
        mjd: f64,
        first_mjd: i32,
        last_mjd: i32,
    },
}

/// Earth orientation parameters on a given UTC day, at 0h UTC.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EopEntry {
    /// Modified Julian Date (UTC) of this entry
    pub mjd: i32,
    /// UT1 - UTC, in seconds
    pub ut1_minus_utc: f64,
    /// Polar motion along X, in arcseconds
    pub x_p: f64,
    /// Polar motion along Y, in arcseconds
    pub y_p: f64,
}

const fn anchor(mjd: i32, ut1_minus_utc: f64, x_p: f64, y_p: f64) -> EopEntry {
    EopEntry {
        mjd,
        ut1_minus_utc,
        x_p,
        y_p,
    }
}

/// Anchor points of the compiled-in series, expanded to a daily grid by [EopTable::from_anchors].
/// Each leap second is bracketed by the day before and the day of its insertion, where UT1 - UTC jumps by +1 s.
#[rustfmt::skip]
pub const EOP_ANCHORS: [EopEntry; 63] = [
    anchor(51544,  0.3554,  0.1996,  0.3648), // 2000-01-01
    anchor(51726,  0.2290, -0.1335,  0.4049), // 2000-07-01
    anchor(51910,  0.0937,  0.2180,  0.2252), // 2001-01-01
    anchor(52091, -0.0101, -0.0771,  0.5355), // 2001-07-01
    anchor(52275, -0.1158,  0.1109,  0.1322), // 2002-01-01
    anchor(52456, -0.2121,  0.0642,  0.5617), // 2002-07-01
    anchor(52640, -0.2893, -0.0244,  0.1708), // 2003-01-01
    anchor(52821, -0.3468,  0.1653,  0.4595), // 2003-07-01
    anchor(53005, -0.3898, -0.0656,  0.3056), // 2004-01-01
    anchor(53101, -0.4399619, -0.140682, 0.333309), // 2004-04-06, IERS
    anchor(53187, -0.4372,  0.1372,  0.3213), // 2004-07-01
    anchor(53371, -0.5039,  0.0246,  0.4145), // 2005-01-01
    anchor(53552, -0.5752,  0.0073,  0.2672), // 2005-07-01
    anchor(53735, -0.6612,  0.1678,  0.3998), // 2005-12-31
    anchor(53736,  0.3388,  0.1673,  0.4015), // 2006-01-01
    anchor(53917,  0.2231, -0.1080,  0.3468), // 2006-07-01
    anchor(54101,  0.0802,  0.2364,  0.2759), // 2007-01-01
    anchor(54282, -0.0759, -0.1039,  0.4883), // 2007-07-01
    anchor(54466, -0.2469,  0.1708,  0.1495), // 2008-01-01
    anchor(54648, -0.4098,  0.0142,  0.5634), // 2008-07-01
    anchor(54831, -0.5929,  0.0305,  0.1351), // 2008-12-31
    anchor(54832,  0.4071,  0.0339,  0.1348), // 2009-01-01
    anchor(55013,  0.2733,  0.1466,  0.5068), // 2009-07-01
    anchor(55197,  0.1141, -0.0559,  0.2431), // 2010-01-01
    anchor(55378, -0.0402,  0.1737,  0.3664), // 2010-07-01
    anchor(55562, -0.1410, -0.0138,  0.3783), // 2011-01-01
    anchor(55743, -0.2553,  0.0729,  0.2676), // 2011-07-01
    anchor(55927, -0.4256,  0.1234,  0.4183), // 2012-01-01
    anchor(56108, -0.5887, -0.0639,  0.2984), // 2012-06-30
    anchor(56109,  0.4113, -0.0636,  0.2966), // 2012-07-01
    anchor(56293,  0.2864,  0.2342,  0.3289), // 2013-01-01
    anchor(56474,  0.1602, -0.1138,  0.4281), // 2013-07-01
    anchor(56658, -0.0632,  0.2216,  0.1867), // 2014-01-01
    anchor(56839, -0.2622, -0.0304,  0.5438), // 2014-07-01
    anchor(57023, -0.4652,  0.0972,  0.1193), // 2015-01-01
    anchor(57203, -0.6221,  0.1166,  0.5386), // 2015-06-30
    anchor(57204,  0.3779,  0.1134,  0.5393), // 2015-07-01
    anchor(57388,  0.1206, -0.0264,  0.1864), // 2016-01-01
    anchor(57570, -0.1504,  0.1887,  0.4198), // 2016-07-01
    anchor(57753, -0.4085, -0.0374,  0.3271), // 2016-12-31
    anchor(57754,  0.5915, -0.0368,  0.3256), // 2017-01-01
    anchor(57935,  0.3561,  0.1331,  0.2892), // 2017-07-01
    anchor(58119,  0.2177,  0.0744,  0.4145), // 2018-01-01
    anchor(58300,  0.0712, -0.0051,  0.2648), // 2018-07-01
    anchor(58484, -0.0331,  0.2112,  0.3712), // 2019-01-01
    anchor(58665, -0.1250, -0.1004,  0.3679), // 2019-07-01
    anchor(58849, -0.1772,  0.2516,  0.2338), // 2020-01-01
    anchor(59031, -0.2129, -0.0684,  0.5034), // 2020-07-01
    anchor(59215, -0.1751,  0.1640,  0.1261), // 2021-01-01
    anchor(59396, -0.1588,  0.0661,  0.5534), // 2021-07-01
    anchor(59580, -0.1104,  0.0238,  0.1405), // 2022-01-01
    anchor(59761, -0.0691,  0.1834,  0.4699), // 2022-07-01
    anchor(59945, -0.0171, -0.0402,  0.2659), // 2023-01-01
    anchor(60126, -0.0032,  0.1797,  0.3273), // 2023-07-01
    anchor(60310,  0.0109,  0.0303,  0.3891), // 2024-01-01
    anchor(60492,  0.0031,  0.0608,  0.2526), // 2024-07-01
    anchor(60676,  0.0374,  0.1724,  0.4001), // 2025-01-01
    anchor(60857,  0.0851, -0.0667,  0.3108), // 2025-07-01
    anchor(61041,  0.1102,  0.2621,  0.2881), // 2026-01-01
    anchor(61222,  0.1250, -0.0872,  0.4505), // 2026-07-01
    anchor(61406,  0.1253,  0.2193,  0.1521), // 2027-01-01
    anchor(61587,  0.1152,  0.0194,  0.5458), // 2027-07-01
    anchor(61771,  0.1004,  0.0835,  0.1134), // 2028-01-01
];

lazy_static! {
    /// Daily Earth orientation table built from [EOP_ANCHORS] on first use.
    pub static ref EOP_TABLE: EopTable = EopTable::from_anchors(&EOP_ANCHORS);
}

/// Earth orientation parameters on a contiguous daily grid of integer UTC MJDs.
#[derive(Clone, Debug, PartialEq)]
pub struct EopTable {
    entries: Vec<EopEntry>,
}

impl EopTable {
    /// Builds a table from entries which must be on consecutive integer MJDs, sorted in increasing order.
    /// Returns None if the entries are empty or not contiguous.
    pub fn from_daily(entries: Vec<EopEntry>) -> Option<Self> {
        if entries.is_empty() || entries.windows(2).any(|w| w[1].mjd != w[0].mjd + 1) {
            return None;
        }
        Some(Self { entries })
    }

    /// Expands sorted anchor points into a daily grid, linearly interpolating every parameter between two
    /// consecutive anchors. Anchors are kept as is in the resulting grid.
    pub fn from_anchors(anchors: &[EopEntry]) -> Self {
        let mut entries = Vec::new();
        for pair in anchors.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let span = (end.mjd - start.mjd) as f64;
            for mjd in start.mjd..end.mjd {
                let weight = (mjd - start.mjd) as f64 / span;
                entries.push(EopEntry {
                    mjd,
                    ut1_minus_utc: lerp(start.ut1_minus_utc, end.ut1_minus_utc, weight),
                    x_p: lerp(start.x_p, end.x_p, weight),
                    y_p: lerp(start.y_p, end.y_p, weight),
                });
            }
        }
        if let Some(last) = anchors.last() {
            entries.push(*last);
        }
        debug!(
            "EOP table: {} daily entries from {} anchors ({EOP_VERSION})",
            entries.len(),
            anchors.len()
        );
        Self { entries }
    }

    /// First and last MJD covered by this table.
    pub fn span(&self) -> (i32, i32) {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first.mjd, last.mjd),
            _ => (0, -1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the grid entry of the provided integer MJD, if any.
    pub fn entry(&self, mjd: i32) -> Option<&EopEntry> {
        let (first, _) = self.span();
        usize::try_from(mjd - first)
            .ok()
            .and_then(|idx| self.entries.get(idx))
    }

    /// UT1 - UTC in seconds at the provided UTC MJD, linearly interpolated between the two bracketing days.
    pub fn ut1_minus_utc(&self, mjd_utc: f64) -> Result<f64, EopError> {
        let (before, after, weight) = self.bracket(mjd_utc)?;
        Ok(lerp(before.ut1_minus_utc, after.ut1_minus_utc, weight))
    }

    /// Polar motion (x_p, y_p) in arcseconds at the provided UTC MJD, linearly interpolated between the two
    /// bracketing days.
    pub fn polar_motion(&self, mjd_utc: f64) -> Result<(f64, f64), EopError> {
        let (before, after, weight) = self.bracket(mjd_utc)?;
        Ok((
            lerp(before.x_p, after.x_p, weight),
            lerp(before.y_p, after.y_p, weight),
        ))
    }

    /// Returns the entries at floor(mjd) and floor(mjd)+1 and the fractional part of the MJD.
    /// On the last grid point, both entries are that point.
    fn bracket(&self, mjd_utc: f64) -> Result<(&EopEntry, &EopEntry, f64), EopError> {
        let (first_mjd, last_mjd) = self.span();
        let out_of_range = OutOfRangeSnafu {
            mjd: mjd_utc,
            first_mjd,
            last_mjd,
        };
        ensure!(
            mjd_utc.is_finite() && mjd_utc >= first_mjd as f64 && mjd_utc <= last_mjd as f64,
            out_of_range
        );
        let day = mjd_utc.floor();
        let weight = mjd_utc - day;
        let before = self.entry(day as i32).context(out_of_range)?;
        if weight == 0.0 {
            return Ok((before, before, weight));
        }
        let after = self.entry(day as i32 + 1).context(out_of_range)?;
        Ok((before, after, weight))
    }
}

fn lerp(start: f64, end: f64, weight: f64) -> f64 {
    (1.0 - weight) * start + weight * end
}

/// UT1 - UTC in seconds from the compiled-in table, cf. [EopTable::ut1_minus_utc].
pub fn ut1_minus_utc(mjd_utc: f64) -> Result<f64, EopError> {
    EOP_TABLE.ut1_minus_utc(mjd_utc)
}

/// Polar motion in arcseconds from the compiled-in table, cf. [EopTable::polar_motion].
pub fn polar_motion(mjd_utc: f64) -> Result<(f64, f64), EopError> {
    EOP_TABLE.polar_motion(mjd_utc)
}
