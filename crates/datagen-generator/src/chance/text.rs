//! Pseudo-words and prose built from consonant/vowel syllables.

use super::data::{CONSONANTS, VOWELS};
use super::ChanceProvider;
use datagen_core::{GeneratedValue, GeneratorOptions};

impl ChanceProvider {
    pub(crate) fn syllable_text(&mut self, options: &GeneratorOptions) -> String {
        let length = match options.int("length") {
            Some(length) => length.max(1),
            None => self.range(2, 3),
        };
        let all = format!("{CONSONANTS}{VOWELS}");

        let mut text = String::new();
        let mut previous = None;
        for _ in 0..length {
            let next = match previous {
                None => self.pick_char(&all),
                Some(c) if CONSONANTS.contains(c) => self.pick_char(VOWELS),
                Some(_) => self.pick_char(CONSONANTS),
            };
            text.push(next);
            previous = Some(next);
        }

        if options.flag("capitalize").unwrap_or(false) {
            capitalize(&text)
        } else {
            text
        }
    }

    pub(crate) fn word_text(&mut self, options: &GeneratorOptions) -> String {
        let syllable_options = GeneratorOptions::new();
        let mut text = String::new();

        if let Some(syllables) = options.int("syllables") {
            for _ in 0..syllables.max(1) {
                text.push_str(&self.syllable_text(&syllable_options));
            }
        } else if let Some(length) = options.int("length") {
            let length = length.max(1) as usize;
            while text.len() < length {
                text.push_str(&self.syllable_text(&syllable_options));
            }
            text.truncate(length);
        } else {
            for _ in 0..self.range(1, 3) {
                text.push_str(&self.syllable_text(&syllable_options));
            }
        }

        if options.flag("capitalize").unwrap_or(false) {
            capitalize(&text)
        } else {
            text
        }
    }

    fn sentence_text(&mut self, options: &GeneratorOptions) -> String {
        let words = match options.int("words") {
            Some(words) => words.max(1),
            None => self.range(12, 18),
        };
        let word_options = GeneratorOptions::new();
        let body: Vec<String> = (0..words).map(|_| self.word_text(&word_options)).collect();
        let mut text = capitalize(&body.join(" "));

        match options.get("punctuation") {
            Some(serde_json::Value::Bool(false)) => {}
            Some(serde_json::Value::String(mark)) => text.push_str(mark),
            _ => text.push('.'),
        }
        text
    }

    /// `length`: character count (default 2-3), `capitalize`.
    pub fn syllable(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::String(self.syllable_text(options))
    }

    /// `syllables` or `length` (default 1-3 syllables), `capitalize`.
    pub fn word(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::String(self.word_text(options))
    }

    /// `words`: word count (default 12-18), `punctuation`: `false` or a mark.
    pub fn sentence(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::String(self.sentence_text(options))
    }

    /// `sentences`: sentence count (default 3-7).
    pub fn paragraph(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let sentences = match options.int("sentences") {
            Some(sentences) => sentences.max(1),
            None => self.range(3, 7),
        };
        let sentence_options = GeneratorOptions::new();
        let text: Vec<String> = (0..sentences)
            .map(|_| self.sentence_text(&sentence_options))
            .collect();
        GeneratedValue::String(text.join(" "))
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
