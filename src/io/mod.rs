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

use crate::errors::SiderealError;
use crate::time::{timestamp_arange, timestamp_linspace, Duration, Timestamp, TimestampConfig};
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use typed_builder::TypedBuilder;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("Failed to read configuration file: {source}"))]
    ReadError { source: io::Error },
    #[snafu(display("Failed to parse YAML configuration file: {source}"))]
    ParseError { source: serde_yaml::Error },
    #[snafu(display("Invalid configuration: {msg}"))]
    InvalidConfig { msg: String },
}

impl PartialEq for ConfigError {
    /// No two configuration errors match
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl From<SiderealError> for ConfigError {
    fn from(e: SiderealError) -> Self {
        Self::InvalidConfig { msg: e.to_string() }
    }
}

pub trait ConfigRepr: Debug + Sized + serde::Serialize + DeserializeOwned {
    /// Builds the configuration representation from the path to a yaml
    fn load<P>(path: P) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).context(ReadSnafu)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds a sequence of "Selves" from the provided path to a yaml
    fn load_many<P>(path: P) -> Result<Vec<Self>, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).context(ReadSnafu)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds a map of names to "selves" from the provided path to a yaml
    fn load_named<P>(path: P) -> Result<BTreeMap<String, Self>, ConfigError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path).context(ReadSnafu)?;
        let reader = BufReader::new(file);

        serde_yaml::from_reader(reader).context(ParseSnafu)
    }

    /// Builds a sequence of "Selves" from the provided string of a yaml
    fn loads_many(data: &str) -> Result<Vec<Self>, ConfigError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ParseSnafu)
    }
}

/// Trait to specify that a structure can be configured from a file.
pub trait Configurable
where
    Self: Sized,
{
    /// The intermediate representation needed to create `Self` or to serialize Self.
    type IntermediateRepr: ConfigRepr;

    fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_config(Self::IntermediateRepr::load(path)?)
    }

    /// Creates a new instance of `self` from the configuration.
    fn from_config(cfg: Self::IntermediateRepr) -> Result<Self, ConfigError>
    where
        Self: Sized;

    /// Converts self into the intermediate representation which is serializable.
    fn to_config(&self) -> Result<Self::IntermediateRepr, ConfigError>;
}

/// Configuration of a sequence of timestamps: exactly one of `num` (evenly spaced, both ends included) or
/// `step` (fixed increment, end excluded) must be set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct SequenceCfg {
    pub start: TimestampConfig,
    pub end: TimestampConfig,
    /// Number of timestamps, for an evenly spaced sequence
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub num: Option<usize>,
    /// Increment between timestamps
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub step: Option<Duration>,
}

impl ConfigRepr for SequenceCfg {}

impl SequenceCfg {
    /// Builds the timestamps described by this configuration.
    pub fn generate(&self) -> Result<Vec<Timestamp>, ConfigError> {
        let start = Timestamp::from_config(self.start)?;
        let end = Timestamp::from_config(self.end)?;
        match (self.num, self.step) {
            (Some(num), None) => Ok(timestamp_linspace(start, end, num)?),
            (None, Some(step)) => Ok(timestamp_arange(start, end, step)?),
            (Some(_), Some(_)) => InvalidConfigSnafu {
                msg: "only one of `num` and `step` may be set",
            }
            .fail(),
            (None, None) => InvalidConfigSnafu {
                msg: "one of `num` or `step` must be set",
            }
            .fail(),
        }
    }
}
