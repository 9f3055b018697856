//! Internet-flavoured generators and GUIDs.

use super::data::{HEX, TLDS};
use super::ChanceProvider;
use datagen_core::{GeneratedValue, GeneratorOptions};
use rand::Rng;
use uuid::Uuid;

const DEFAULT_HASH_LENGTH: i64 = 40;

impl ChanceProvider {
    fn domain_text(&mut self, options: &GeneratorOptions) -> String {
        let tld = match options.text("tld") {
            Some(tld) => tld.to_string(),
            None => self.pick(TLDS).to_string(),
        };
        format!("{}.{tld}", self.word_text(&GeneratorOptions::new()))
    }

    /// `length`: local part length, `domain`: fixed domain.
    pub fn email(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let mut word_options = GeneratorOptions::new();
        if let Some(length) = options.int("length") {
            word_options.insert("length", length);
        }
        let local = self.word_text(&word_options);
        let domain = match options.text("domain") {
            Some(domain) => domain.to_string(),
            None => self.domain_text(&GeneratorOptions::new()),
        };
        GeneratedValue::String(format!("{local}@{domain}"))
    }

    /// `tld`: fixed top level domain.
    pub fn domain(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::String(self.domain_text(options))
    }

    pub fn tld(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::from(self.pick(TLDS))
    }

    /// `protocol` (default `http`), `domain`, `path`, `extensions` (list).
    pub fn url(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let protocol = options.text("protocol").unwrap_or("http").to_string();
        let domain = match options.text("domain") {
            Some(domain) => domain.to_string(),
            None => self.domain_text(&GeneratorOptions::new()),
        };
        let path = match options.text("path") {
            Some(path) => path.to_string(),
            None => self.word_text(&GeneratorOptions::new()),
        };
        let extension = options
            .list("extensions")
            .map(|exts| {
                exts.iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect::<Vec<_>>()
            })
            .filter(|exts| !exts.is_empty())
            .map(|exts| format!(".{}", self.pick(&exts)))
            .unwrap_or_default();
        GeneratedValue::String(format!("{protocol}://{domain}/{path}{extension}"))
    }

    /// IPv4 address.
    pub fn ip(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        let octets: Vec<String> = (0..4).map(|_| self.range(1, 254).to_string()).collect();
        GeneratedValue::String(octets.join("."))
    }

    /// `format`: `hex` (default) or `rgb`; `casing: upper` for hex digits.
    pub fn color(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let (r, g, b) = (self.range(0, 255), self.range(0, 255), self.range(0, 255));
        let text = match options.text("format") {
            Some("rgb") => format!("rgb({r},{g},{b})"),
            _ => {
                let hex = format!("#{r:02x}{g:02x}{b:02x}");
                if options.text("casing") == Some("upper") {
                    hex.to_ascii_uppercase()
                } else {
                    hex
                }
            }
        };
        GeneratedValue::String(text)
    }

    /// `length`: hex digit count (default 40), `casing: upper`.
    pub fn hash(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let length = options.int("length").unwrap_or(DEFAULT_HASH_LENGTH).max(0);
        let text: String = (0..length).map(|_| self.pick_char(HEX)).collect();
        if options.text("casing") == Some("upper") {
            GeneratedValue::String(text.to_ascii_uppercase())
        } else {
            GeneratedValue::String(text)
        }
    }

    /// Version 4 GUID drawn from the provider's RNG, so it follows the seed.
    pub fn guid(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);

        bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
        bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

        GeneratedValue::String(Uuid::from_bytes(bytes).to_string())
    }
}
