//! Test modules for the Ala Trie crate.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error display and conversion
//! - Property-based tests of the trie against a simple set model
//! - Shared fixtures and strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{sequence_set_strategy, sequence_strategy, TestFixture};
