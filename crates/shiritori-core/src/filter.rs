//! Admissibility filter shared by every conditioned query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::{CompoundTier, ShiritoriEntry};

/// Which compound tiers a query accepts. Each level admits a superset of the
/// previous one: `Strict` ⊂ `Limited` ⊂ `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundFilterMode {
    /// `A` only.
    Strict,
    /// `A` or `B`.
    Limited,
    /// `A`, `B` or `C`.
    #[default]
    All,
}

impl CompoundFilterMode {
    pub fn admits(self, tier: &CompoundTier) -> bool {
        match (self, tier) {
            (_, CompoundTier::Unrecognized(_)) => false,
            (_, CompoundTier::A) => true,
            (Self::Limited | Self::All, CompoundTier::B) => true,
            (Self::All, CompoundTier::C) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CompoundFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Limited => "limited",
            Self::All => "all",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compound filter mode '{0}' (expected strict, limited or all)")]
pub struct ParseFilterModeError(String);

impl FromStr for CompoundFilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "limited" => Ok(Self::Limited),
            "all" => Ok(Self::All),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// The filter chain: proper-noun gate, then compound tier gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    pub allow_proper_noun: bool,
    pub compound: CompoundFilterMode,
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self {
            allow_proper_noun: true,
            compound: CompoundFilterMode::All,
        }
    }
}

impl EntryFilter {
    pub fn new(allow_proper_noun: bool, compound: CompoundFilterMode) -> Self {
        Self {
            allow_proper_noun,
            compound,
        }
    }

    pub fn admits(&self, entry: &ShiritoriEntry) -> bool {
        if !self.allow_proper_noun && entry.is_proper_noun() {
            return false;
        }
        self.compound.admits(&entry.compound)
    }
}
