//! Random alias generation for saves that arrive without an alias.
//!
//! The generator does not check uniqueness. A collision shows up later as
//! [`crate::domain::error::RegistryError::AliasExists`] from the registry, and
//! the save flow decides whether to try again.

use rand::Rng;

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Characters a generated alias is drawn from: `a-z` then `0-9`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Produces candidate aliases.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Draws each character independently from the thread-local RNG.
///
/// `rand::rng()` is seeded per thread from the OS, so concurrent requests
/// never share a predictable sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl RandomAliasGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();

        (0..length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}
