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

use crate::time::{DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY};
use crate::utils::arcsec_to_rad;
use std::f64::consts::TAU;

/// Greenwich Mean Sidereal Time (IAU 1982), in radians within [0, 2π), from the UT1 Julian Date.
pub fn gmst(jd_ut1: f64) -> f64 {
    let t1 = (jd_ut1 - J2000_JD) / DAYS_PER_CENTURY;
    let seconds = 67_310.548_41 + (876_600.0 * 3_600.0 + 8_640_184.812_866) * t1 + 0.093_104 * t1.powi(2)
        - 6.2e-6 * t1.powi(3);
    seconds.rem_euclid(SECONDS_PER_DAY) * TAU / SECONDS_PER_DAY
}

/// Equation of the equinoxes, in radians, including the two lunar node terms of the 1994 IAU resolution.
///
/// `omega` is the mean longitude of the ascending node of the Moon, in radians.
pub fn equation_of_equinoxes(dpsi: f64, mean_obliquity: f64, omega: f64) -> f64 {
    dpsi * mean_obliquity.cos()
        + arcsec_to_rad(0.002_64) * omega.sin()
        + arcsec_to_rad(0.000_063) * (2.0 * omega).sin()
}

/// Greenwich Apparent Sidereal Time, in radians. This is not reduced to [0, 2π) so it may slightly exceed
/// that range when GMST is close to a full turn.
pub fn gast(gmst: f64, dpsi: f64, mean_obliquity: f64, omega: f64) -> f64 {
    gmst + equation_of_equinoxes(dpsi, mean_obliquity, omega)
}
