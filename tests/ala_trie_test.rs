// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Ala Trie.
//! Exercises the public API from outside the crate, including the
//! multi-threaded insert-then-enumerate contract.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use ala_trie::config::{AlaConfig, ConfigLoader, Validate, ENV_PREFIX};
use ala_trie::error::config::ConfigError;
use ala_trie::{AlaTrie, AlaTrieConfig, WriteMode};

#[test]
fn test_trie_basic() {
    let trie = AlaTrie::<char>::new();

    trie.insert_str("cat");
    trie.insert_str("car");
    trie.insert_str("dog");

    assert!(!trie.contains_str("ca"));
    assert!(trie.contains_prefix_str("ca"));
    assert!(trie.contains_str("cat"));
    assert_eq!(trie.count(), 3);

    let words: HashSet<String> = trie.words().collect();
    let expected: HashSet<String> = ["cat", "car", "dog"].iter().map(|w| w.to_string()).collect();
    assert_eq!(words, expected);
}

#[test]
fn test_token_sequences() {
    let trie = AlaTrie::<String, usize>::new();
    let tokens = |s: &str| s.split_whitespace().map(str::to_string).collect::<Vec<_>>();

    trie.insert_with_value(tokens("the quick brown fox"), 1);
    trie.insert_with_value(tokens("the quick red fox"), 2);
    trie.insert(tokens("the lazy dog"));

    assert_eq!(trie.get(&tokens("the quick red fox")), Some(2));
    assert_eq!(trie.get(&tokens("the lazy dog")), None);
    assert!(trie.contains(&tokens("the lazy dog")));
    assert!(trie.contains_prefix(&tokens("the quick")));
    assert!(!trie.contains(&tokens("the quick")));

    let under_quick: HashSet<Vec<String>> = trie.iter_prefix(&tokens("the quick")).collect();
    assert_eq!(under_quick.len(), 2);
    assert!(under_quick.contains(&tokens("the quick brown fox")));
}

/// N threads insert distinct sequences, wait at a barrier, then any thread
/// enumerating sees all of them.
#[test]
fn test_concurrent_inserts_then_enumerate() {
    let thread_count = num_cpus::get().clamp(2, 16);
    let items_per_thread = 100;

    for mode in [WriteMode::Immediate, WriteMode::Deferred] {
        let trie = Arc::new(AlaTrie::<u32>::with_config(
            AlaTrieConfig::new().with_write_mode(mode),
        ));
        let barrier = Arc::new(Barrier::new(thread_count));

        let handles: Vec<_> = (0..thread_count)
            .map(|t| {
                let trie = Arc::clone(&trie);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    for i in 0..items_per_thread {
                        trie.insert([t as u32, i as u32, (t * i) as u32]);
                    }

                    barrier.wait();

                    trie.iter().collect::<HashSet<Vec<u32>>>()
                })
            })
            .collect();

        let expected: HashSet<Vec<u32>> = (0..thread_count)
            .flat_map(|t| (0..items_per_thread).map(move |i| vec![t as u32, i as u32, (t * i) as u32]))
            .collect();

        for handle in handles {
            let seen = handle.join().expect("worker thread panicked");
            assert_eq!(seen, expected, "mode {:?}", mode);
        }
        assert_eq!(trie.count(), thread_count * items_per_thread);
    }
}

#[test]
fn test_trie_from_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ala.toml");
    std::fs::write(&path, "[trie]\nwrite_mode = \"deferred\"\ninitial_capacity = 256\n").unwrap();

    let config: AlaConfig = ConfigLoader::new(Some(&path), "ALA_IT").load().unwrap();
    let trie = AlaTrie::<char>::from_settings(&config.trie).unwrap();

    assert_eq!(trie.config().get_write_mode(), WriteMode::Deferred);
    assert_eq!(trie.config().get_initial_capacity(), 256);

    trie.insert_str("");
    assert!(trie.contains_str(""));
    assert!(!trie.contains_prefix_str("anything"));
    assert_eq!(trie.count(), 1);
}

#[test]
fn test_init_installs_logging() {
    let config = ala_trie::init(None).unwrap();

    // Matches whatever the process environment layers over the defaults
    let expected = ConfigLoader::new(None::<&std::path::Path>, ENV_PREFIX)
        .load()
        .unwrap();
    assert_eq!(config, expected);
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_pending_limit_rejected_at_construction() {
    let mut config = AlaConfig::default();
    config.trie.write_mode = WriteMode::Deferred;
    config.trie.max_pending_writes = 0;

    assert!(matches!(
        AlaTrie::<char>::from_settings(&config.trie),
        Err(ConfigError::ValidationError(_))
    ));
}
