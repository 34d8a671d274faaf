//! Deployment topology of the managed artifact.

use std::fmt;
use std::str::FromStr;

/// The deployment shape of an installation.
///
/// A topology is chosen once per operation and never changes while that
/// operation's steps are in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Everything runs on one node.
    Single,
    /// Services are spread over a clustered set of nodes behind a site node.
    Multi,
}

impl Topology {
    /// Stable identifier used in configuration stores and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Single => "single",
            Topology::Multi => "multi",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Topology::Single),
            "multi" => Ok(Topology::Multi),
            _ => Err(format!(
                "invalid topology '{}'; expected 'single' or 'multi'",
                s
            )),
        }
    }
}
