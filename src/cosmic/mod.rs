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

//! Earth orientation: the nutation series, sidereal time and the rotations between J2000 and ITRF.

mod nutation;
pub use self::nutation::{mean_obliquity, nutation, nutation_with, DelaunayArguments};

mod sidereal;
pub use self::sidereal::{equation_of_equinoxes, gast, gmst};

/// Elementary and composite frame rotations.
pub mod rotations;
pub use self::rotations::{Euler3Axis, EulerRotation, FrameRotation, FrameTransforms};
