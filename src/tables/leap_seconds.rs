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

/// Last leap second included in [LEAP_SECONDS].
pub const LEAP_SECONDS_VERSION: &str = "IERS Bulletin C, through 2017-01-01";

/// UTC Julian Date at which each TAI - UTC value (in seconds) takes effect.
pub const LEAP_SECONDS: [(f64, f64); 28] = [
    (2_441_317.5, 10.0), // 1972 JAN 1
    (2_441_499.5, 11.0), // 1972 JUL 1
    (2_441_683.5, 12.0), // 1973 JAN 1
    (2_442_048.5, 13.0), // 1974 JAN 1
    (2_442_413.5, 14.0), // 1975 JAN 1
    (2_442_778.5, 15.0), // 1976 JAN 1
    (2_443_144.5, 16.0), // 1977 JAN 1
    (2_443_509.5, 17.0), // 1978 JAN 1
    (2_443_874.5, 18.0), // 1979 JAN 1
    (2_444_239.5, 19.0), // 1980 JAN 1
    (2_444_786.5, 20.0), // 1981 JUL 1
    (2_445_151.5, 21.0), // 1982 JUL 1
    (2_445_516.5, 22.0), // 1983 JUL 1
    (2_446_247.5, 23.0), // 1985 JUL 1
    (2_447_161.5, 24.0), // 1988 JAN 1
    (2_447_892.5, 25.0), // 1990 JAN 1
    (2_448_257.5, 26.0), // 1991 JAN 1
    (2_448_804.5, 27.0), // 1992 JUL 1
    (2_449_169.5, 28.0), // 1993 JUL 1
    (2_449_534.5, 29.0), // 1994 JUL 1
    (2_450_083.5, 30.0), // 1996 JAN 1
    (2_450_630.5, 31.0), // 1997 JUL 1
    (2_451_179.5, 32.0), // 1999 JAN 1
    (2_453_736.5, 33.0), // 2006 JAN 1
    (2_454_832.5, 34.0), // 2009 JAN 1
    (2_456_109.5, 35.0), // 2012 JUL 1
    (2_457_204.5, 36.0), // 2015 JUL 1
    (2_457_754.5, 37.0), // 2017 JAN 1
];

/// Returns TAI - UTC in seconds at the provided UTC Julian Date.
///
/// The value is the one of the greatest threshold at or before `jd_utc`. Dates before the first threshold are
/// clamped to the first entry, and dates after the last one keep the last entry: this lookup never fails.
pub fn tai_minus_utc(jd_utc: f64) -> f64 {
    let idx = LEAP_SECONDS.partition_point(|&(threshold, _)| threshold <= jd_utc);
    if idx == 0 {
        debug!(
            "JD {jd_utc} precedes the first leap second entry, clamping TAI-UTC to {}",
            LEAP_SECONDS[0].1
        );
        LEAP_SECONDS[0].1
    } else {
        LEAP_SECONDS[idx - 1].1
    }
}
