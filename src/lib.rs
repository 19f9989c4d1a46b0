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

/*! # sidereal

Time scales and Earth orientation for astrodynamics: from a UTC calendar timestamp, derive UTC, UT1, TAI and TT
(as Julian and Modified Julian Dates), the mean and apparent sidereal times, and the IAU 1976/1980 rotation chain
between the J2000 inertial frame and the Earth-fixed ITRF.

```rust,ignore
use sidereal::prelude::*;

let ts = Timestamp::from_gregorian(2024, 3, 20, 3, 6, 0, 0)?;
let itrf_to_j2000 = ts.itrf_to_j2000();
let hourly = timestamp_arange(ts, (ts + Duration::from_days(1))?, Duration::from_hours(1))?;
```
*/

/// Earth orientation: nutation, sidereal time, and frame rotations.
pub mod cosmic;

/// Compiled-in leap second, Earth orientation parameter, and nutation coefficient tables.
pub mod tables;

/// Timestamps, durations, and sequences of timestamps.
pub mod time;

/// Utility functions shared by different modules.
pub mod utils;

mod errors;
/// Functions which may fail return a [SiderealError].
pub use self::errors::SiderealError;

/// Configuration loading from YAML.
pub mod io;

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub mod prelude {
    pub use crate::cosmic::FrameTransforms;
    pub use crate::io::{ConfigRepr, Configurable, SequenceCfg};
    pub use crate::time::{
        timestamp_arange, timestamp_linspace, Duration, Timestamp, TimestampConfig, TimestampSeries,
    };
    pub use crate::SiderealError;
}
