//! Engineer filter: nobody, everybody, or one specific engineer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::roster::Engineer;

/// Sentinel the engineer picker uses for "all engineers".
pub const ALL_ENGINEERS: &str = "__all__";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineerFilter {
    /// No engineer selected. Every cell evaluates to `Unavailable` or `Locked`.
    None,
    #[default]
    All,
    Only(String),
}

impl EngineerFilter {
    /// The engineers that pass this filter, in roster order.
    pub fn apply<'a>(&self, engineers: &'a [Engineer]) -> Vec<&'a Engineer> {
        match self {
            EngineerFilter::None => Vec::new(),
            EngineerFilter::All => engineers.iter().collect(),
            EngineerFilter::Only(id) => engineers.iter().filter(|e| &e.id == id).collect(),
        }
    }
}

impl FromStr for EngineerFilter {
    type Err = Infallible;

    /// `""` selects nobody, `"__all__"` or `"all"` everybody, anything else one id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" => EngineerFilter::None,
            ALL_ENGINEERS | "all" => EngineerFilter::All,
            id => EngineerFilter::Only(id.to_string()),
        })
    }
}

impl fmt::Display for EngineerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineerFilter::None => f.write_str(""),
            EngineerFilter::All => f.write_str(ALL_ENGINEERS),
            EngineerFilter::Only(id) => f.write_str(id),
        }
    }
}
