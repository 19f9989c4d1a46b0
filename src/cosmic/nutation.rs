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

use crate::tables::nutation80::{NutationTerm, AMPLITUDE_UNIT_ARCSEC, IAU1980_NUTATION};
use crate::utils::{arcsec_to_rad, dms_to_rad};

/// The five Delaunay arguments of the lunisolar motion, in radians (not reduced to [0, 2π)).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DelaunayArguments {
    /// Mean anomaly of the Moon, l
    pub l: f64,
    /// Mean anomaly of the Sun, l'
    pub l_prime: f64,
    /// Mean argument of latitude of the Moon, F
    pub f: f64,
    /// Mean elongation of the Moon from the Sun, D
    pub d: f64,
    /// Mean longitude of the ascending node of the Moon, Ω
    pub omega: f64,
}

impl DelaunayArguments {
    /// Evaluates the arguments at `centuries_tt` Julian centuries of TT past J2000.0 (IERS Conventions 2003,
    /// polynomials in arcseconds).
    pub fn at(centuries_tt: f64) -> Self {
        let t = centuries_tt;
        Self {
            l: arcsec_poly(t, [485_868.249036, 1_717_915_923.2178, 31.8792, 0.051635, -0.000_244_70]),
            l_prime: arcsec_poly(t, [1_287_104.793_05, 129_596_581.0481, -0.5532, 0.000136, -0.000_011_49]),
            f: arcsec_poly(t, [335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037, 0.000_004_17]),
            d: arcsec_poly(t, [1_072_260.703_69, 1_602_961_601.2090, -6.3706, 0.006593, -0.000_031_69]),
            omega: arcsec_poly(t, [450_160.398036, -6_962_890.5431, 7.4722, 0.007702, -0.000_059_39]),
        }
    }

    /// Argument of the provided nutation term, in radians.
    pub fn phase(&self, term: &NutationTerm) -> f64 {
        term.l as f64 * self.l
            + term.l_prime as f64 * self.l_prime
            + term.f as f64 * self.f
            + term.d as f64 * self.d
            + term.omega as f64 * self.omega
    }
}

fn arcsec_poly(t: f64, coeffs: [f64; 5]) -> f64 {
    let arcsec = coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c);
    arcsec_to_rad(arcsec)
}

/// Mean obliquity of the ecliptic (IAU 1976), in radians.
pub fn mean_obliquity(centuries_tt: f64) -> f64 {
    let t = centuries_tt;
    dms_to_rad(23.439_291_11, 0.0, 0.0) - dms_to_rad(0.0, 0.0, 46.8150) * t
        - dms_to_rad(0.0, 0.0, 0.00059) * t.powi(2)
        + dms_to_rad(0.0, 0.0, 0.001813) * t.powi(3)
}

/// Nutation in longitude and in obliquity (Δψ, Δε), in radians, from the full IAU 1980 series.
pub fn nutation(centuries_tt: f64) -> (f64, f64) {
    nutation_with(&DelaunayArguments::at(centuries_tt), centuries_tt)
}

/// Same as [nutation] but reusing already computed Delaunay arguments.
pub fn nutation_with(args: &DelaunayArguments, centuries_tt: f64) -> (f64, f64) {
    let (dpsi, deps) = IAU1980_NUTATION
        .iter()
        .map(|term| {
            let (sin_phi, cos_phi) = args.phase(term).sin_cos();
            (
                (term.psi + term.psi_rate * centuries_tt) * sin_phi,
                (term.eps + term.eps_rate * centuries_tt) * cos_phi,
            )
        })
        .fold((0.0, 0.0), |(dpsi, deps), (p, e)| (dpsi + p, deps + e));

    (
        arcsec_to_rad(dpsi * AMPLITUDE_UNIT_ARCSEC),
        arcsec_to_rad(deps * AMPLITUDE_UNIT_ARCSEC),
    )
}
