//! Notification identifiers.
//!
//! The gateway reports a rejected notification by echoing its identifier in
//! an error response, so a sender needs identifiers that are distinct for as
//! long as it may still receive that response. [`IdentifierGenerator`] is a
//! plain atomic counter owned by whoever assigns them: usually one per
//! connection pool, shared by reference or behind an `Arc`.
//!
//! # Wraparound
//!
//! The counter turns negative after `2^31` calls and values repeat after
//! `2^32`. On the way it passes through `-1`, which means "omitted" in a
//! frame. Neither case is handled here.

use std::sync::atomic::{AtomicI32, Ordering};

/// Thread-safe source of increasing notification identifiers.
#[derive(Debug, Default)]
pub struct IdentifierGenerator {
    last: AtomicI32,
}

impl IdentifierGenerator {
    /// Generator whose first identifier is `1`.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Generator whose first identifier is `last + 1`.
    ///
    /// Lets a restarted sender continue past identifiers it already used.
    pub fn starting_at(last: i32) -> Self {
        Self { last: AtomicI32::new(last) }
    }

    /// Increment the counter and return the new value.
    pub fn next(&self) -> i32 {
        // Only uniqueness matters; no other memory is published with the id.
        self.last.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    /// Most recently issued identifier, or the starting value if none was.
    pub fn current(&self) -> i32 {
        self.last.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use super::*;

    #[test]
    fn first_identifier_is_one() {
        let generator = IdentifierGenerator::new();
        assert_eq!(generator.current(), 0);
        assert_eq!(generator.next(), 1);
        assert_eq!(generator.next(), 2);
        assert_eq!(generator.current(), 2);
    }

    #[test]
    fn starting_at_continues_sequence() {
        let generator = IdentifierGenerator::starting_at(41);
        assert_eq!(generator.next(), 42);
    }

    #[test]
    fn wraps_at_maximum() {
        let generator = IdentifierGenerator::starting_at(i32::MAX);
        assert_eq!(generator.next(), i32::MIN);
        assert_eq!(generator.next(), i32::MIN + 1);
    }

    #[test]
    fn generators_are_independent() {
        let a = IdentifierGenerator::new();
        let b = IdentifierGenerator::new();
        a.next();
        a.next();
        assert_eq!(b.next(), 1);
    }

    #[test]
    fn concurrent_identifiers_are_distinct() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 1_000;

        let generator = Arc::new(IdentifierGenerator::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..PER_THREAD).map(|_| generator.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "identifier {id} issued twice");
            }
        }

        assert_eq!(seen.len(), THREADS * PER_THREAD);
        assert_eq!(generator.current(), (THREADS * PER_THREAD) as i32);
    }
}
