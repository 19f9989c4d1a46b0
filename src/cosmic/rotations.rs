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
use crate::utils::{arcsec_to_rad, dms_to_rad, r1, r2, r3};
use std::fmt;

/// Anything which can provide a direction cosine matrix from one frame to the next.
pub trait FrameRotation: Send + Sync + fmt::Debug {
    fn dcm(&self) -> Matrix3<f64>;
}

/// Defines an Euler rotation, angle must be in radians
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EulerRotation {
    R1(f64),
    R2(f64),
    R3(f64),
}

impl EulerRotation {
    pub fn r1_from_degrees(angle_deg: f64) -> Self {
        Self::R1(angle_deg.to_radians())
    }
    pub fn r2_from_degrees(angle_deg: f64) -> Self {
        Self::R2(angle_deg.to_radians())
    }
    pub fn r3_from_degrees(angle_deg: f64) -> Self {
        Self::R3(angle_deg.to_radians())
    }
    pub fn r1_from_arcsec(angle_arcsec: f64) -> Self {
        Self::R1(arcsec_to_rad(angle_arcsec))
    }
    pub fn r2_from_arcsec(angle_arcsec: f64) -> Self {
        Self::R2(arcsec_to_rad(angle_arcsec))
    }
    pub fn r3_from_arcsec(angle_arcsec: f64) -> Self {
        Self::R3(arcsec_to_rad(angle_arcsec))
    }
}

impl FrameRotation for EulerRotation {
    /// Get the DCM from this Euler rotation
    fn dcm(&self) -> Matrix3<f64> {
        match *self {
            Self::R1(angle) => r1(angle),
            Self::R2(angle) => r2(angle),
            Self::R3(angle) => r3(angle),
        }
    }
}

/// A fixed three-axis Euler rotation, applied right to left: `third * second * first`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler3Axis {
    /// The first rotation (e.g. R3)
    pub first: EulerRotation,
    /// The second rotation (e.g. R2)
    pub second: EulerRotation,
    /// The third and final rotation (e.g. R3, to complete a 3-2-3 rotation)
    pub third: EulerRotation,
}

impl FrameRotation for Euler3Axis {
    fn dcm(&self) -> Matrix3<f64> {
        self.third.dcm() * self.second.dcm() * self.first.dcm()
    }
}

/// IAU 1976 precession angles (ζ, θ, z), in radians.
pub fn precession_angles(centuries_tt: f64) -> (f64, f64, f64) {
    let t = centuries_tt;
    let zeta = dms_to_rad(0.0, 0.0, 2306.2181 * t + 0.30188 * t.powi(2) + 0.017998 * t.powi(3));
    let theta = dms_to_rad(0.0, 0.0, 2004.3109 * t - 0.42665 * t.powi(2) - 0.041833 * t.powi(3));
    let z = dms_to_rad(0.0, 0.0, 2306.2181 * t + 1.09468 * t.powi(2) + 0.018203 * t.powi(3));
    (zeta, theta, z)
}

/// Precession from J2000 to the mean of date: `R3(-z) R2(θ) R3(-ζ)`.
pub fn precession(centuries_tt: f64) -> Euler3Axis {
    let (zeta, theta, z) = precession_angles(centuries_tt);
    Euler3Axis {
        first: EulerRotation::R3(-zeta),
        second: EulerRotation::R2(theta),
        third: EulerRotation::R3(-z),
    }
}

/// Nutation from the mean of date to the true of date: `R1(-ε̄-Δε) R3(-Δψ) R1(ε̄)`.
pub fn nutation(mean_obliquity: f64, dpsi: f64, deps: f64) -> Euler3Axis {
    Euler3Axis {
        first: EulerRotation::R1(mean_obliquity),
        second: EulerRotation::R3(-dpsi),
        third: EulerRotation::R1(-mean_obliquity - deps),
    }
}

/// True of date to the True Equator Mean Equinox frame, a rotation by the classical equation of the equinoxes.
pub fn tod_to_teme(mean_obliquity: f64, dpsi: f64) -> EulerRotation {
    EulerRotation::R3(dpsi * mean_obliquity.cos())
}

/// TEME to the Greenwich true of date frame, by the mean sidereal angle.
pub fn teme_to_gtod(gmst: f64) -> EulerRotation {
    EulerRotation::R3(gmst)
}

/// Greenwich true of date to ITRF: `R2(-xp) R1(-yp)`, with the pole coordinates in arcseconds.
pub fn polar_motion(x_p_arcsec: f64, y_p_arcsec: f64) -> Matrix3<f64> {
    EulerRotation::r2_from_arcsec(-x_p_arcsec).dcm() * EulerRotation::r1_from_arcsec(-y_p_arcsec).dcm()
}

/// The five rotations linking J2000 to ITRF at a given instant. Each matrix maps coordinates from the frame
/// of its first name to the frame of its second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameTransforms {
    pub j2000_to_mod: Matrix3<f64>,
    pub mod_to_tod: Matrix3<f64>,
    pub tod_to_teme: Matrix3<f64>,
    pub teme_to_gtod: Matrix3<f64>,
    pub gtod_to_itrf: Matrix3<f64>,
}

impl FrameTransforms {
    /// Builds all of the rotations from already computed Earth orientation quantities (angles in radians,
    /// pole coordinates in arcseconds).
    pub fn compute(
        centuries_tt: f64,
        mean_obliquity: f64,
        dpsi: f64,
        deps: f64,
        gmst: f64,
        x_p_arcsec: f64,
        y_p_arcsec: f64,
    ) -> Self {
        Self {
            j2000_to_mod: precession(centuries_tt).dcm(),
            mod_to_tod: nutation(mean_obliquity, dpsi, deps).dcm(),
            tod_to_teme: tod_to_teme(mean_obliquity, dpsi).dcm(),
            teme_to_gtod: teme_to_gtod(gmst).dcm(),
            gtod_to_itrf: polar_motion(x_p_arcsec, y_p_arcsec),
        }
    }

    /// Rotation from the true of date frame to GTOD, i.e. the Earth rotation by the apparent sidereal angle
    /// without the node terms.
    pub fn earth_rotation(&self) -> Matrix3<f64> {
        self.teme_to_gtod * self.tod_to_teme
    }

    /// Full chain from J2000 to ITRF.
    pub fn j2000_to_itrf(&self) -> Matrix3<f64> {
        self.gtod_to_itrf * self.earth_rotation() * self.mod_to_tod * self.j2000_to_mod
    }

    /// Inverse of [Self::j2000_to_itrf], the transpose since every factor is orthogonal.
    pub fn itrf_to_j2000(&self) -> Matrix3<f64> {
        self.j2000_to_itrf().transpose()
    }
}
