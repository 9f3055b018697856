//! Chance-style randomness provider.
//!
//! `ChanceProvider` implements [`RandomProvider`] on top of a seeded
//! `StdRng` and adds a catalogue of named generators (`name`, `email`,
//! `guid`, `sentence`, ...) addressable from string schema markers.
//!
//! Every generator reads its settings from [`GeneratorOptions`] and never
//! fails: contradictory settings are normalized and logged with `warn!`.
//!
//! | Group   | Generators                                                              |
//! |---------|-------------------------------------------------------------------------|
//! | basics  | bool, falsy, integer, natural, floating, character, letter, string      |
//! | text    | syllable, word, sentence, paragraph                                     |
//! | person  | first, last, name, prefix, suffix, age, company, phone, zip             |
//! | web     | email, domain, tld, url, ip, color, hash, guid                          |
//! | time    | date, timestamp, year                                                   |

mod basics;
mod data;
mod person;
mod text;
mod time;
mod web;

use crate::provider::{seeded_rng, NamedGenerator, RandomProvider};
use datagen_core::{GeneratedValue, GeneratorOptions, Seed};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::warn;

/// Largest integer exactly representable in an IEEE double.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

static NAMED_GENERATORS: &[(&str, NamedGenerator<ChanceProvider>)] = &[
    ("bool", ChanceProvider::bool),
    ("falsy", ChanceProvider::falsy),
    ("integer", ChanceProvider::integer),
    ("natural", ChanceProvider::natural),
    ("floating", ChanceProvider::floating),
    ("character", ChanceProvider::character),
    ("letter", ChanceProvider::letter),
    ("string", ChanceProvider::string),
    ("syllable", ChanceProvider::syllable),
    ("word", ChanceProvider::word),
    ("sentence", ChanceProvider::sentence),
    ("paragraph", ChanceProvider::paragraph),
    ("first", ChanceProvider::first),
    ("last", ChanceProvider::last),
    ("name", ChanceProvider::name),
    ("prefix", ChanceProvider::prefix),
    ("suffix", ChanceProvider::suffix),
    ("age", ChanceProvider::age),
    ("company", ChanceProvider::company),
    ("phone", ChanceProvider::phone),
    ("zip", ChanceProvider::zip),
    ("email", ChanceProvider::email),
    ("domain", ChanceProvider::domain),
    ("tld", ChanceProvider::tld),
    ("url", ChanceProvider::url),
    ("ip", ChanceProvider::ip),
    ("color", ChanceProvider::color),
    ("hash", ChanceProvider::hash),
    ("guid", ChanceProvider::guid),
    ("date", ChanceProvider::date),
    ("timestamp", ChanceProvider::timestamp),
    ("year", ChanceProvider::year),
];

/// Seedable provider modeled on the Chance.js API.
#[derive(Debug, Clone)]
pub struct ChanceProvider {
    rng: StdRng,
}

impl ChanceProvider {
    /// Create a provider; `None` seeds from OS entropy.
    pub fn new(seed: Option<&Seed>) -> Self {
        Self::from_rng(seeded_rng(seed))
    }

    /// Create a provider around an existing RNG.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// All named generators, in catalogue order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMED_GENERATORS.iter().map(|(name, _)| *name)
    }

    /// Uniform integer in `[min, max]`; swaps reversed bounds.
    fn range(&mut self, min: i64, max: i64) -> i64 {
        if min > max {
            warn!(min, max, "min is greater than max, swapping bounds");
            return self.rng.gen_range(max..=min);
        }
        self.rng.gen_range(min..=max)
    }

    /// Pick one element of a non-empty constant slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.gen_range(0..items.len())]
    }

    /// Pick one character of a non-empty constant pool.
    fn pick_char(&mut self, pool: &str) -> char {
        let chars: Vec<char> = pool.chars().collect();
        self.pick(&chars)
    }
}

impl RandomProvider for ChanceProvider {
    fn boolean(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        self.bool(options)
    }

    fn falsy(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        ChanceProvider::falsy(self, options)
    }

    fn integer(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        ChanceProvider::integer(self, options)
    }

    fn natural(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        ChanceProvider::natural(self, options)
    }

    fn string(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        ChanceProvider::string(self, options)
    }

    fn date(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        ChanceProvider::date(self, options)
    }

    fn branch_count(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }

    fn lookup(&self, name: &str) -> Option<NamedGenerator<Self>> {
        NAMED_GENERATORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, generator)| *generator)
    }

    fn generator_names(&self) -> Vec<&'static str> {
        Self::names().collect()
    }
}
