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

use crate::tables::eop::EopError;
use crate::time::calendar::CalendarError;
use crate::time::sequence::SequenceError;
use snafu::prelude::*;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SiderealError {
    #[snafu(display("invalid calendar input: {source}"))]
    Calendar { source: CalendarError },
    #[snafu(display("Earth orientation unavailable: {source}"))]
    Orientation { source: EopError },
    #[snafu(display("cannot build timestamp sequence: {source}"))]
    Sequence { source: SequenceError },
    #[snafu(display("system clock unavailable: {details}"))]
    SystemClock { details: String },
}

impl From<CalendarError> for SiderealError {
    fn from(source: CalendarError) -> Self {
        Self::Calendar { source }
    }
}

impl From<EopError> for SiderealError {
    fn from(source: EopError) -> Self {
        Self::Orientation { source }
    }
}

impl From<SequenceError> for SiderealError {
    fn from(source: SequenceError) -> Self {
        Self::Sequence { source }
    }
}
