//! Primitive generators: booleans, falsy values, numbers, characters, strings.

use super::data::{LOWER, NUMBERS, SYMBOLS, UPPER};
use super::{ChanceProvider, MAX_SAFE_INTEGER};
use datagen_core::{GeneratedValue, GeneratorOptions};
use rand::Rng;
use tracing::warn;

const DEFAULT_LIKELIHOOD: f64 = 50.0;
const DEFAULT_FIXED: i64 = 4;
const MAX_FIXED: i64 = 15;
const STRING_MIN_LENGTH: i64 = 5;
const STRING_MAX_LENGTH: i64 = 20;

fn default_falsy_pool() -> [GeneratedValue; 5] {
    [
        GeneratedValue::Bool(false),
        GeneratedValue::Null,
        GeneratedValue::Int(0),
        GeneratedValue::Float(f64::NAN),
        GeneratedValue::String(String::new()),
    ]
}

impl ChanceProvider {
    /// `likelihood`: 0-100 chance of `true` (default 50).
    pub fn bool(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let likelihood = match options.float("likelihood") {
            None => DEFAULT_LIKELIHOOD,
            Some(l) if l.is_nan() => {
                warn!("likelihood is NaN, using default");
                DEFAULT_LIKELIHOOD
            }
            Some(l) if !(0.0..=100.0).contains(&l) => {
                warn!(likelihood = l, "likelihood outside 0-100, clamping");
                l.clamp(0.0, 100.0)
            }
            Some(l) => l,
        };
        GeneratedValue::Bool(self.rng.gen::<f64>() * 100.0 < likelihood)
    }

    /// `pool`: list of values to draw from. Values are returned as given,
    /// even if they are truthy.
    pub fn falsy(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        match options.list("pool") {
            Some(pool) if !pool.is_empty() => {
                let idx = self.rng.gen_range(0..pool.len());
                GeneratedValue::from(&pool[idx])
            }
            pool => {
                if pool.is_some() {
                    warn!("empty falsy pool, using default pool");
                }
                let mut defaults = default_falsy_pool();
                let idx = self.rng.gen_range(0..defaults.len());
                std::mem::replace(&mut defaults[idx], GeneratedValue::Null)
            }
        }
    }

    /// `min`/`max`: inclusive bounds (default +/- 2^53 - 1).
    pub fn integer(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let min = options.int("min").unwrap_or(-MAX_SAFE_INTEGER);
        let max = options.int("max").unwrap_or(MAX_SAFE_INTEGER);
        GeneratedValue::Int(self.range(min, max))
    }

    /// `min`/`max`: inclusive non-negative bounds; `exclude` (or
    /// `exclusions`): values never returned.
    pub fn natural(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let mut min = options.int("min").unwrap_or(0);
        let mut max = options.int("max").unwrap_or(MAX_SAFE_INTEGER);
        if min < 0 || max < 0 {
            warn!(min, max, "natural bounds must be non-negative, clamping");
            min = min.max(0);
            max = max.max(0);
        }
        if min > max {
            warn!(min, max, "min is greater than max, swapping bounds");
            std::mem::swap(&mut min, &mut max);
        }

        let excluded = options
            .list("exclude")
            .or_else(|| options.list("exclusions"))
            .unwrap_or_default();
        if excluded.is_empty() {
            return GeneratedValue::Int(self.rng.gen_range(min..=max));
        }

        let mut excluded: Vec<i64> = excluded
            .iter()
            .filter_map(serde_json::Value::as_i64)
            .filter(|n| (min..=max).contains(n))
            .collect();
        excluded.sort_unstable();
        excluded.dedup();

        // 0 <= min <= max, so the span fits in u64 even for the full range.
        let span = (max - min) as u64 + 1;
        let available = span.saturating_sub(excluded.len() as u64);
        if available == 0 {
            warn!(min, max, "every natural in range is excluded, returning min");
            return GeneratedValue::Int(min);
        }

        // Draw the k-th allowed value and step over exclusions below it.
        let mut n = min + self.rng.gen_range(0..available) as i64;
        for ex in excluded {
            if n >= ex {
                n += 1;
            } else {
                break;
            }
        }
        GeneratedValue::Int(n)
    }

    /// `min`/`max`: bounds, `fixed`: decimal places (default 4).
    pub fn floating(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let fixed = options.int("fixed").unwrap_or(DEFAULT_FIXED).clamp(0, MAX_FIXED);
        let scale = 10f64.powi(fixed as i32);
        let limit = MAX_SAFE_INTEGER as f64 / scale;
        let min = options.float("min").unwrap_or(-limit).clamp(-limit, limit);
        let max = options.float("max").unwrap_or(limit).clamp(-limit, limit);
        let scaled = self.range((min * scale).round() as i64, (max * scale).round() as i64);
        GeneratedValue::Float(scaled as f64 / scale)
    }

    /// Single character; see [`ChanceProvider::string`] for pool options.
    pub fn character(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let pool = char_pool(options);
        GeneratedValue::String(self.pick(&pool).to_string())
    }

    /// Single letter; `casing: upper` for capitals.
    pub fn letter(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let pool = match options.text("casing") {
            Some("upper") => UPPER,
            _ => LOWER,
        };
        GeneratedValue::String(self.pick_char(pool).to_string())
    }

    /// Random string.
    ///
    /// * `length` - exact length; otherwise drawn from `min..=max` (5..=20)
    /// * `pool` - characters to draw from
    /// * `alpha` - letters only
    /// * `numeric` - digits only
    /// * `symbols` - symbols only
    /// * `casing` - `upper` or `lower` letters
    pub fn string(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let length = match options.int("length") {
            Some(length) => length.max(0),
            None => {
                let min = options.int("min").unwrap_or(STRING_MIN_LENGTH).max(0);
                let max = options.int("max").unwrap_or(STRING_MAX_LENGTH).max(0);
                self.range(min, max)
            }
        };
        let pool = char_pool(options);
        let text = (0..length).map(|_| self.pick(&pool)).collect();
        GeneratedValue::String(text)
    }
}

/// Character pool selected by `pool`, `alpha`, `numeric`, `symbols` and `casing`.
fn char_pool(options: &GeneratorOptions) -> Vec<char> {
    if let Some(pool) = options.text("pool").filter(|p| !p.is_empty()) {
        return pool.chars().collect();
    }

    let letters = match options.text("casing") {
        Some("upper") => UPPER.to_string(),
        Some("lower") => LOWER.to_string(),
        _ => format!("{LOWER}{UPPER}"),
    };

    let pool = if options.flag("alpha").unwrap_or(false) {
        letters
    } else if options.flag("numeric").unwrap_or(false) {
        NUMBERS.to_string()
    } else if options.flag("symbols").unwrap_or(false) {
        SYMBOLS.to_string()
    } else {
        format!("{letters}{NUMBERS}{SYMBOLS}")
    };
    pool.chars().collect()
}
