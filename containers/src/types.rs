use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque block identifier.
///
/// The derived `Ord` is byte-wise lexicographic over the id's UTF-8 form and
/// doubles as the fork-choice tie-break order: among equally weighted
/// siblings the smallest id wins. This is the abstract analogue of
/// "lowest hash wins" in systems where ids are content hashes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        BlockId(id.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        BlockId(id)
    }
}

/// Direct, per-block weight (e.g. accumulated attestation support).
/// Non-negative by construction; scenario entries with negative values
/// fail deserialization.
pub type Weight = u64;
