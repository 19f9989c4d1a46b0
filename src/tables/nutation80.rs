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

/// Unit of the amplitudes of [IAU1980_NUTATION], in arcseconds (0.1 milliarcsecond).
pub const AMPLITUDE_UNIT_ARCSEC: f64 = 1e-4;

/// One term of the 1980 IAU theory of nutation.
///
/// The argument of the term is `l*L + l_prime*L' + f*F + d*D + omega*Ω` where the capitals are the Delaunay
/// arguments. Amplitudes are in units of [AMPLITUDE_UNIT_ARCSEC], and the rates are per Julian century of TT.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NutationTerm {
    pub l: i8,
    pub l_prime: i8,
    pub f: i8,
    pub d: i8,
    pub omega: i8,
    /// Constant part of the longitude amplitude (sine)
    pub psi: f64,
    /// Rate of the longitude amplitude
    pub psi_rate: f64,
    /// Constant part of the obliquity amplitude (cosine)
    pub eps: f64,
    /// Rate of the obliquity amplitude
    pub eps_rate: f64,
}

#[allow(clippy::too_many_arguments)]
const fn t(
    l: i8,
    l_prime: i8,
    f: i8,
    d: i8,
    omega: i8,
    psi: f64,
    psi_rate: f64,
    eps: f64,
    eps_rate: f64,
) -> NutationTerm {
    NutationTerm {
        l,
        l_prime,
        f,
        d,
        omega,
        psi,
        psi_rate,
        eps,
        eps_rate,
    }
}

/// The 106 terms of the IAU 1980 nutation series, in the order of Seidelmann (1982).
#[rustfmt::skip]
pub const IAU1980_NUTATION: [NutationTerm; 106] = [
    // 1-10
    t( 0,  0,  0,  0,  1, -171996.0, -174.2,  92025.0,  8.9),
    t( 0,  0,  0,  0,  2,    2062.0,    0.2,   -895.0,  0.5),
    t(-2,  0,  2,  0,  1,      46.0,    0.0,    -24.0,  0.0),
    t( 2,  0, -2,  0,  0,      11.0,    0.0,      0.0,  0.0),
    t(-2,  0,  2,  0,  2,      -3.0,    0.0,      1.0,  0.0),
    t( 1, -1,  0, -1,  0,      -3.0,    0.0,      0.0,  0.0),
    t( 0, -2,  2, -2,  1,      -2.0,    0.0,      1.0,  0.0),
    t( 2,  0, -2,  0,  1,       1.0,    0.0,      0.0,  0.0),
    t( 0,  0,  2, -2,  2,  -13187.0,   -1.6,   5736.0, -3.1),
    t( 0,  1,  0,  0,  0,    1426.0,   -3.4,     54.0, -0.1),
    // 11-20
    t( 0,  1,  2, -2,  2,    -517.0,    1.2,    224.0, -0.6),
    t( 0, -1,  2, -2,  2,     217.0,   -0.5,    -95.0,  0.3),
    t( 0,  0,  2, -2,  1,     129.0,    0.1,    -70.0,  0.0),
    t( 2,  0,  0, -2,  0,      48.0,    0.0,      1.0,  0.0),
    t( 0,  0,  2, -2,  0,     -22.0,    0.0,      0.0,  0.0),
    t( 0,  2,  0,  0,  0,      17.0,   -0.1,      0.0,  0.0),
    t( 0,  1,  0,  0,  1,     -15.0,    0.0,      9.0,  0.0),
    t( 0,  2,  2, -2,  2,     -16.0,    0.1,      7.0,  0.0),
    t( 0, -1,  0,  0,  1,     -12.0,    0.0,      6.0,  0.0),
    t(-2,  0,  0,  2,  1,      -6.0,    0.0,      3.0,  0.0),
    // 21-30
    t( 0, -1,  2, -2,  1,      -5.0,    0.0,      3.0,  0.0),
    t( 2,  0,  0, -2,  1,       4.0,    0.0,     -2.0,  0.0),
    t( 0,  1,  2, -2,  1,       4.0,    0.0,     -2.0,  0.0),
    t( 1,  0,  0, -1,  0,      -4.0,    0.0,      0.0,  0.0),
    t( 2,  1,  0, -2,  0,       1.0,    0.0,      0.0,  0.0),
    t( 0,  0, -2,  2,  1,       1.0,    0.0,      0.0,  0.0),
    t( 0,  1, -2,  2,  0,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  1,  0,  0,  2,       1.0,    0.0,      0.0,  0.0),
    t(-1,  0,  0,  1,  1,       1.0,    0.0,      0.0,  0.0),
    t( 0,  1,  2, -2,  0,      -1.0,    0.0,      0.0,  0.0),
    // 31-40
    t( 0,  0,  2,  0,  2,   -2274.0,   -0.2,    977.0, -0.5),
    t( 1,  0,  0,  0,  0,     712.0,    0.1,     -7.0,  0.0),
    t( 0,  0,  2,  0,  1,    -386.0,   -0.4,    200.0,  0.0),
    t( 1,  0,  2,  0,  2,    -301.0,    0.0,    129.0, -0.1),
    t( 1,  0,  0, -2,  0,    -158.0,    0.0,     -1.0,  0.0),
    t(-1,  0,  2,  0,  2,     123.0,    0.0,    -53.0,  0.0),
    t( 0,  0,  0,  2,  0,      63.0,    0.0,     -2.0,  0.0),
    t( 1,  0,  0,  0,  1,      63.0,    0.1,    -33.0,  0.0),
    t(-1,  0,  0,  0,  1,     -58.0,   -0.1,     32.0,  0.0),
    t(-1,  0,  2,  2,  2,     -59.0,    0.0,     26.0,  0.0),
    // 41-50
    t( 1,  0,  2,  0,  1,     -51.0,    0.0,     27.0,  0.0),
    t( 0,  0,  2,  2,  2,     -38.0,    0.0,     16.0,  0.0),
    t( 2,  0,  0,  0,  0,      29.0,    0.0,     -1.0,  0.0),
    t( 1,  0,  2, -2,  2,      29.0,    0.0,    -12.0,  0.0),
    t( 2,  0,  2,  0,  2,     -31.0,    0.0,     13.0,  0.0),
    t( 0,  0,  2,  0,  0,      26.0,    0.0,     -1.0,  0.0),
    t(-1,  0,  2,  0,  1,      21.0,    0.0,    -10.0,  0.0),
    t(-1,  0,  0,  2,  1,      16.0,    0.0,     -8.0,  0.0),
    t( 1,  0,  0, -2,  1,     -13.0,    0.0,      7.0,  0.0),
    t(-1,  0,  2,  2,  1,     -10.0,    0.0,      5.0,  0.0),
    // 51-60
    t( 1,  1,  0, -2,  0,      -7.0,    0.0,      0.0,  0.0),
    t( 0,  1,  2,  0,  2,       7.0,    0.0,     -3.0,  0.0),
    t( 0, -1,  2,  0,  2,      -7.0,    0.0,      3.0,  0.0),
    t( 1,  0,  2,  2,  2,      -8.0,    0.0,      3.0,  0.0),
    t( 1,  0,  0,  2,  0,       6.0,    0.0,      0.0,  0.0),
    t( 2,  0,  2, -2,  2,       6.0,    0.0,     -3.0,  0.0),
    t( 0,  0,  0,  2,  1,      -6.0,    0.0,      3.0,  0.0),
    t( 0,  0,  2,  2,  1,      -7.0,    0.0,      3.0,  0.0),
    t( 1,  0,  2, -2,  1,       6.0,    0.0,     -3.0,  0.0),
    t( 0,  0,  0, -2,  1,      -5.0,    0.0,      3.0,  0.0),
    // 61-70
    t( 1, -1,  0,  0,  0,       5.0,    0.0,      0.0,  0.0),
    t( 2,  0,  2,  0,  1,      -5.0,    0.0,      3.0,  0.0),
    t( 0,  1,  0, -2,  0,      -4.0,    0.0,      0.0,  0.0),
    t( 1,  0, -2,  0,  0,       4.0,    0.0,      0.0,  0.0),
    t( 0,  0,  0,  1,  0,      -4.0,    0.0,      0.0,  0.0),
    t( 1,  1,  0,  0,  0,      -3.0,    0.0,      0.0,  0.0),
    t( 1,  0,  2,  0,  0,       3.0,    0.0,      0.0,  0.0),
    t( 1, -1,  2,  0,  2,      -3.0,    0.0,      1.0,  0.0),
    t(-1, -1,  2,  2,  2,      -3.0,    0.0,      1.0,  0.0),
    t(-2,  0,  0,  0,  1,      -2.0,    0.0,      1.0,  0.0),
    // 71-80
    t( 3,  0,  2,  0,  2,      -3.0,    0.0,      1.0,  0.0),
    t( 0, -1,  2,  2,  2,      -3.0,    0.0,      1.0,  0.0),
    t( 1,  1,  2,  0,  2,       2.0,    0.0,     -1.0,  0.0),
    t(-1,  0,  2, -2,  1,      -2.0,    0.0,      1.0,  0.0),
    t( 2,  0,  0,  0,  1,       2.0,    0.0,     -1.0,  0.0),
    t( 1,  0,  0,  0,  2,      -2.0,    0.0,      1.0,  0.0),
    t( 3,  0,  0,  0,  0,       2.0,    0.0,      0.0,  0.0),
    t( 0,  0,  2,  1,  2,       2.0,    0.0,     -1.0,  0.0),
    t(-1,  0,  0,  0,  2,       1.0,    0.0,     -1.0,  0.0),
    t( 1,  0,  0, -4,  0,      -1.0,    0.0,      0.0,  0.0),
    // 81-90
    t(-2,  0,  2,  2,  2,       1.0,    0.0,     -1.0,  0.0),
    t(-1,  0,  2,  4,  2,      -2.0,    0.0,      1.0,  0.0),
    t( 2,  0,  0, -4,  0,      -1.0,    0.0,      0.0,  0.0),
    t( 1,  1,  2, -2,  2,       1.0,    0.0,     -1.0,  0.0),
    t( 1,  0,  2,  2,  1,      -1.0,    0.0,      1.0,  0.0),
    t(-2,  0,  2,  4,  2,      -1.0,    0.0,      1.0,  0.0),
    t(-1,  0,  4,  0,  2,       1.0,    0.0,      0.0,  0.0),
    t( 1, -1,  0, -2,  0,       1.0,    0.0,      0.0,  0.0),
    t( 2,  0,  2, -2,  1,       1.0,    0.0,     -1.0,  0.0),
    t( 2,  0,  2,  2,  2,      -1.0,    0.0,      0.0,  0.0),
    // 91-100
    t( 1,  0,  0,  2,  1,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  0,  4, -2,  2,       1.0,    0.0,      0.0,  0.0),
    t( 3,  0,  2, -2,  2,       1.0,    0.0,      0.0,  0.0),
    t( 1,  0,  2, -2,  0,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  1,  2,  0,  1,       1.0,    0.0,      0.0,  0.0),
    t(-1, -1,  0,  2,  1,       1.0,    0.0,      0.0,  0.0),
    t( 0,  0, -2,  0,  1,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  0,  2, -1,  2,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  1,  0,  2,  0,      -1.0,    0.0,      0.0,  0.0),
    t( 1,  0, -2, -2,  0,      -1.0,    0.0,      0.0,  0.0),
    // 101-106
    t( 0, -1,  2,  0,  1,      -1.0,    0.0,      0.0,  0.0),
    t( 1,  1,  0, -2,  1,      -1.0,    0.0,      0.0,  0.0),
    t( 1,  0, -2,  2,  0,      -1.0,    0.0,      0.0,  0.0),
    t( 2,  0,  0,  2,  0,       1.0,    0.0,      0.0,  0.0),
    t( 0,  0,  2,  4,  2,      -1.0,    0.0,      0.0,  0.0),
    t( 0,  1,  0,  1,  0,       1.0,    0.0,      0.0,  0.0),
];
