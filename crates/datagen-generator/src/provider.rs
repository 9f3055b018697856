//! Randomness provider capability consumed by the schema generator.

use datagen_core::{GeneratedValue, GeneratorOptions, Seed};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

/// A named generator function resolved by [`RandomProvider::lookup`].
pub type NamedGenerator<P> = fn(&mut P, &GeneratorOptions) -> GeneratedValue;

/// Source of random primitive values.
///
/// The schema generator only knows about the primitive markers below; any
/// other string marker is resolved through [`RandomProvider::lookup`]. An
/// unknown name is not an error: the generator falls back to
/// [`RandomProvider::string`].
///
/// Implementations must be infallible. Contradictory options (`min > max`,
/// out-of-range likelihoods, empty pools) are normalized, not rejected.
pub trait RandomProvider {
    /// Boolean; `likelihood` is the 0-100 chance of `true`.
    fn boolean(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Falsy value drawn from `pool` (or the provider's default pool).
    fn falsy(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Signed integer in `[min, max]`.
    fn integer(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Natural number in `[min, max]`, skipping `exclude`.
    fn natural(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Generic string (`length`, `pool`, `alpha`, `casing`, `symbols`).
    fn string(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Date; `string: true` requests the text form.
    fn date(&mut self, options: &GeneratorOptions) -> GeneratedValue;

    /// Uniform branch count in `[0, max]` for a recursion point.
    fn branch_count(&mut self, max: u32) -> u32;

    /// Resolve a named generator.
    fn lookup(&self, name: &str) -> Option<NamedGenerator<Self>>
    where
        Self: Sized;

    /// Names accepted by [`RandomProvider::lookup`].
    fn generator_names(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// Build the RNG for a seed.
///
/// Numeric seeds go straight to `seed_from_u64`; text seeds are hashed with
/// SHA-256 into a full 32-byte seed. Without a seed the RNG is seeded from
/// the OS.
pub fn seeded_rng(seed: Option<&Seed>) -> StdRng {
    match seed {
        Some(Seed::Number(n)) => StdRng::seed_from_u64(*n),
        Some(Seed::Text(text)) => {
            let digest = Sha256::digest(text.as_bytes());
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(&digest);
            StdRng::from_seed(bytes)
        }
        None => StdRng::from_entropy(),
    }
}
