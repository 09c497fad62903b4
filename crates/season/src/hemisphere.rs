//! Hemisphere classification and season relabeling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeasonError;
use crate::season::SeasonName;

/// Which naming convention applies to season dates.
///
/// The equator has no seasons of its own and uses the northern names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// Northern convention; datasets are written in it.
    #[default]
    Northern,
    /// Southern convention: spring and autumn swap, summer and winter swap.
    Southern,
    /// Labeled like [`Hemisphere::Northern`].
    Equator,
}

impl Hemisphere {
    /// Local name of a season given in the northern convention.
    pub fn relabel(self, season: SeasonName) -> SeasonName {
        match self {
            Self::Southern => season.opposite(),
            Self::Northern | Self::Equator => season,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Southern => "southern",
            Self::Equator => "equator",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = SeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "northern" | "north" | "n" => Ok(Self::Northern),
            "southern" | "south" | "s" => Ok(Self::Southern),
            "equator" | "equatorial" => Ok(Self::Equator),
            other => Err(SeasonError::UnknownHemisphere {
                value: other.to_string(),
            }),
        }
    }
}
