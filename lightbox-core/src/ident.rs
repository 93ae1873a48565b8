//! Generated ids for trigger elements that arrive without one.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const TOKEN_LEN: usize = 7;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces `<prefix><token>` ids with a 7 character base-36 token.
///
/// Tokens are pseudo-random; [`TriggerIdGenerator::fresh_id`] re-draws until
/// the candidate does not collide with an id already in the page.
#[derive(Debug, Clone)]
pub struct TriggerIdGenerator {
    prefix: String,
    rng: SmallRng,
}

impl TriggerIdGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn next_token(&mut self) -> String {
        (0..TOKEN_LEN)
            .map(|_| char::from(ALPHABET[self.rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }

    /// Draw ids until `taken` reports one as free.
    pub fn fresh_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let token = self.next_token();
            let candidate = format!("{}{token}", self.prefix);
            if !taken(&candidate) {
                return candidate;
            }
            log::debug!("trigger id {candidate} already in use, drawing again");
        }
    }
}
