use std::fmt;

use serde::{Serialize, Serializer};

/// Part-of-speech class marking proper nouns in the catalog.
pub const PROPER_NOUN: &str = "固有名詞";

/// Part-of-speech class marking common nouns in the catalog.
pub const COMMON_NOUN: &str = "普通名詞";

/// Coarse compound classification from the lexicon (`A` simplest, `C` most compound).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompoundTier {
    A,
    B,
    C,
    /// Any tag outside `A`/`B`/`C`, kept verbatim. Never admissible.
    Unrecognized(String),
}

impl CompoundTier {
    /// Parse a catalog column literally. Case matters: `"a"` is unrecognized.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for CompoundTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CompoundTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One lexical item of the catalog, keyed by its reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiritoriEntry {
    pub reading: String,
    /// Written form; alternatives are `/`-separated, e.g. `"紙/神"`.
    pub surface: String,
    pub pos_class: String,
    pub pos_subclass: String,
    pub compound: CompoundTier,
}

impl ShiritoriEntry {
    pub fn is_proper_noun(&self) -> bool {
        self.pos_class == PROPER_NOUN
    }

    /// First character of the reading, or `None` for an empty reading.
    pub fn head(&self) -> Option<char> {
        self.reading.chars().next()
    }

    /// Surface alternatives in stored order, empty segments dropped.
    pub fn surface_variants(&self) -> Vec<&str> {
        self.surface.split('/').filter(|s| !s.is_empty()).collect()
    }
}
