//! Data structures provided by the crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Every public operation safe to call from many threads at once

pub mod ala_trie;

// Re-export common data structures
pub use ala_trie::{AlaTrie, AlaTrieConfig, Sequences, WriteMode};
