//! Random alias generation for requests that do not supply one.

use rand::Rng;

/// URL-safe alphabet, the same 64 symbols nanoid-style ids use.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Default length of generated aliases.
pub const DEFAULT_ALIAS_LENGTH: usize = 8;

/// Source of aliases for requests without a custom one.
///
/// A generated alias that collides with an existing record is not retried;
/// it surfaces as a conflict like any user-supplied alias.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    fn generate(&self, length: usize) -> String;
}

/// Generates aliases from the thread-local CSPRNG.
///
/// At the default length of 8 there are 64^8 (about 2.8e14) possible codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = rand::rng();
        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
