//! People, organisations and contact details.

use super::data::{
    COMPANIES, FIRST_NAMES_FEMALE, FIRST_NAMES_MALE, LAST_NAMES, PREFIXES_FEMALE, PREFIXES_MALE,
    SUFFIXES, UPPER,
};
use super::ChanceProvider;
use datagen_core::{GeneratedValue, GeneratorOptions};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
}

impl ChanceProvider {
    fn gender(&mut self, options: &GeneratorOptions) -> Gender {
        match options.text("gender").map(str::to_ascii_lowercase).as_deref() {
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            _ if self.rng.gen_bool(0.5) => Gender::Male,
            _ => Gender::Female,
        }
    }

    fn first_text(&mut self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.pick(FIRST_NAMES_MALE),
            Gender::Female => self.pick(FIRST_NAMES_FEMALE),
        }
    }

    fn prefix_text(&mut self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.pick(PREFIXES_MALE),
            Gender::Female => self.pick(PREFIXES_FEMALE),
        }
    }

    /// `gender`: `male` or `female`.
    pub fn first(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let gender = self.gender(options);
        GeneratedValue::from(self.first_text(gender))
    }

    pub fn last(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::from(self.pick(LAST_NAMES))
    }

    /// Full name.
    ///
    /// * `gender` - `male` or `female`
    /// * `middle` - add a middle name
    /// * `middle_initial` - add a middle initial
    /// * `prefix` / `suffix` - add an honorific or suffix
    pub fn name(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let gender = self.gender(options);
        let mut parts: Vec<String> = Vec::with_capacity(5);

        if options.flag("prefix").unwrap_or(false) {
            parts.push(self.prefix_text(gender).to_string());
        }
        parts.push(self.first_text(gender).to_string());
        if options.flag("middle").unwrap_or(false) {
            parts.push(self.first_text(gender).to_string());
        } else if options.flag("middle_initial").unwrap_or(false) {
            parts.push(format!("{}.", self.pick_char(UPPER)));
        }
        parts.push(self.pick(LAST_NAMES).to_string());
        if options.flag("suffix").unwrap_or(false) {
            parts.push(self.pick(SUFFIXES).to_string());
        }

        GeneratedValue::String(parts.join(" "))
    }

    /// `gender`: `male` or `female`.
    pub fn prefix(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let gender = self.gender(options);
        GeneratedValue::from(self.prefix_text(gender))
    }

    pub fn suffix(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::from(self.pick(SUFFIXES))
    }

    /// `type`: `child`, `teen`, `adult` (default), `senior` or `all`.
    pub fn age(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let (min, max) = match options.text("type") {
            Some("child") => (0, 12),
            Some("teen") => (13, 19),
            Some("senior") => (65, 100),
            Some("all") => (0, 100),
            _ => (18, 65),
        };
        GeneratedValue::Int(self.range(min, max))
    }

    pub fn company(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::from(self.pick(COMPANIES))
    }

    /// US phone number; `formatted: false` returns bare digits.
    pub fn phone(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let area = format!("{}{:02}", self.range(2, 9), self.range(0, 99));
        let exchange = format!("{}{:02}", self.range(2, 9), self.range(0, 99));
        let line = format!("{:04}", self.range(0, 9999));

        let text = if options.flag("formatted").unwrap_or(true) {
            format!("({area}) {exchange}-{line}")
        } else {
            format!("{area}{exchange}{line}")
        };
        GeneratedValue::String(text)
    }

    /// Five digit zip code; `plusfour` appends the ZIP+4 extension.
    pub fn zip(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let mut text = format!("{:05}", self.range(0, 99_999));
        if options.flag("plusfour").unwrap_or(false) {
            text.push_str(&format!("-{:04}", self.range(0, 9_999)));
        }
        GeneratedValue::String(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagen_core::Seed;

    fn provider() -> ChanceProvider {
        ChanceProvider::new(Some(&Seed::from("people")))
    }

    #[test]
    fn test_first_respects_gender() {
        let mut p = provider();
        let options = GeneratorOptions::new().with("gender", "female");
        for _ in 0..20 {
            let value = p.first(&options);
            assert!(FIRST_NAMES_FEMALE.contains(&value.as_str().unwrap()));
        }
    }

    #[test]
    fn test_name_has_first_and_last() {
        let mut p = provider();
        let value = p.name(&GeneratorOptions::new());
        let parts: Vec<&str> = value.as_str().unwrap().split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(LAST_NAMES.contains(&parts[1]));
    }

    #[test]
    fn test_name_with_prefix_and_suffix() {
        let mut p = provider();
        let options = GeneratorOptions::new()
            .with("prefix", true)
            .with("suffix", true)
            .with("middle_initial", true);
        let value = p.name(&options);
        let parts: Vec<&str> = value.as_str().unwrap().split(' ').collect();
        assert_eq!(parts.len(), 5);
        assert!(parts[2].ends_with('.'));
        assert!(SUFFIXES.contains(&parts[4]));
    }

    #[test]
    fn test_age_ranges() {
        let mut p = provider();
        let options = GeneratorOptions::new().with("type", "teen");
        for _ in 0..50 {
            let n = p.age(&options).as_i64().unwrap();
            assert!((13..=19).contains(&n));
        }
    }

    #[test]
    fn test_phone_format() {
        let mut p = provider();
        let value = p.phone(&GeneratorOptions::new());
        let s = value.as_str().unwrap();
        assert_eq!(s.len(), 14);
        assert!(s.starts_with('('));
        let digits = p.phone(&GeneratorOptions::new().with("formatted", false));
        assert_eq!(digits.as_str().unwrap().len(), 10);
    }

    #[test]
    fn test_zip_plusfour() {
        let mut p = provider();
        let value = p.zip(&GeneratorOptions::new().with("plusfour", true));
        assert_eq!(value.as_str().unwrap().len(), 10);
    }
}
