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

use crate::na::Matrix3;
use approx::abs_diff_eq;

/// Number of arcseconds in one radian.
pub const RAD_TO_ARCSEC: f64 = 180.0 * 3600.0 / std::f64::consts::PI;

/// Converts an angle in arcseconds to radians.
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec / RAD_TO_ARCSEC
}

/// Converts degrees, arcminutes, and arcseconds to radians. All three parts carry the same sign convention, i.e. they are simply added.
pub fn dms_to_rad(degrees: f64, arcmin: f64, arcsec: f64) -> f64 {
    (degrees + arcmin / 60.0 + arcsec / 3600.0).to_radians()
}

/// Rotation of the frame about the X axis by `angle` radians.
pub fn r1(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c)
}

/// Rotation of the frame about the Y axis by `angle` radians.
pub fn r2(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c)
}

/// Rotation of the frame about the Z axis by `angle` radians.
pub fn r3(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0)
}

/// Returns whether `m * m^T` is the identity to within `epsilon` on every element.
pub fn is_orthogonal(m: &Matrix3<f64>, epsilon: f64) -> bool {
    abs_diff_eq!(m * m.transpose(), Matrix3::identity(), epsilon = epsilon)
}

