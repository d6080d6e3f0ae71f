#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Deepest fixed depth a caller may configure
pub const MAX_FIXED_DEPTH: u32 = 4;
/// Cap on the depth chosen by [`SearchDepth::Best`]
pub const MAX_DYNAMIC_DEPTH: u32 = 6;
/// Default tree-size budget for [`SearchDepth::Best`]
pub const DEFAULT_NODE_BUDGET: u64 = 1_000_000;
pub const DEFAULT_DEPTH: u32 = 2;

/// How many plies the engine looks ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchDepth {
    /// A fixed number of plies
    Fixed(u32),
    /// The deepest search whose estimated tree fits the node budget
    Best,
}

impl Default for SearchDepth {
    fn default() -> Self {
        SearchDepth::Fixed(DEFAULT_DEPTH)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub depth: SearchDepth,
    /// Worker threads for the root move loop (1 = sequential)
    pub threads: usize,
    /// Tree-size estimate [`SearchDepth::Best`] must stay within
    pub node_budget: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: SearchDepth::default(),
            threads: 1,
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }
}

impl SearchConfig {
    /// Sequential search at a fixed depth
    #[must_use]
    pub fn fixed(depth: u32) -> Self {
        SearchConfig {
            depth: SearchDepth::Fixed(depth),
            ..SearchConfig::default()
        }
    }
}
