//! Date and time generators.

use super::ChanceProvider;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use datagen_core::{GeneratedValue, GeneratorOptions};
use tracing::warn;

/// Default window for generated dates, fixed so seeded runs never depend on
/// the wall clock.
const MIN_YEAR: i64 = 1970;
const MAX_YEAR: i64 = 2099;

/// 2099-12-31T23:59:59Z
const MAX_TIMESTAMP: i64 = 4_102_444_799;

impl ChanceProvider {
    /// Random date.
    ///
    /// * `min` / `max` - RFC 3339 or `YYYY-MM-DD` bounds; take precedence
    /// * `year`, `month`, `day` - pin individual components
    /// * `string` - return `M/D/YYYY` text instead of a date
    /// * `american` - `false` switches the text form to `D/M/YYYY`
    pub fn date(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let date = match (bound(options, "min"), bound(options, "max")) {
            (None, None) => self.date_from_parts(options),
            (min, max) => {
                let min = min.map_or(0, |dt| dt.timestamp());
                let max = max.map_or(MAX_TIMESTAMP, |dt| dt.timestamp());
                let millis = self.range(min * 1000, max * 1000);
                DateTime::from_timestamp_millis(millis).unwrap_or_default()
            }
        };

        if !options.flag("string").unwrap_or(false) {
            return GeneratedValue::DateTime(date);
        }
        let text = if options.flag("american").unwrap_or(true) {
            format!("{}/{}/{}", date.month(), date.day(), date.year())
        } else {
            format!("{}/{}/{}", date.day(), date.month(), date.year())
        };
        GeneratedValue::String(text)
    }

    fn date_from_parts(&mut self, options: &GeneratorOptions) -> DateTime<Utc> {
        let year = match options.int("year") {
            Some(year) => year.clamp(1, 9999) as i32,
            None => self.range(MIN_YEAR, MAX_YEAR) as i32,
        };
        let month = match options.int("month") {
            Some(month) => month.clamp(1, 12) as u32,
            None => self.range(1, 12) as u32,
        };
        let last_day = days_in_month(year, month);
        let day = match options.int("day") {
            Some(day) if !(1..=i64::from(last_day)).contains(&day) => {
                warn!(year, month, day, "day outside month, clamping");
                day.clamp(1, i64::from(last_day)) as u32
            }
            Some(day) => day as u32,
            None => self.range(1, i64::from(last_day)) as u32,
        };

        let hour = self.range(0, 23) as u32;
        let minute = self.range(0, 59) as u32;
        let second = self.range(0, 59) as u32;
        let milli = self.range(0, 999) as u32;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, milli))
            .map(|naive| naive.and_utc())
            .unwrap_or_default()
    }

    /// Unix timestamp in seconds, within the default date window.
    pub fn timestamp(&mut self, _options: &GeneratorOptions) -> GeneratedValue {
        GeneratedValue::Int(self.range(1, MAX_TIMESTAMP))
    }

    /// Four digit year as text; `min`/`max` default to 1970..=2099.
    pub fn year(&mut self, options: &GeneratorOptions) -> GeneratedValue {
        let min = options.int("min").unwrap_or(MIN_YEAR);
        let max = options.int("max").unwrap_or(MAX_YEAR);
        GeneratedValue::String(self.range(min, max).to_string())
    }
}

fn bound(options: &GeneratorOptions, key: &str) -> Option<DateTime<Utc>> {
    let text = options.text(key)?;
    let parsed = parse_timestamp(text);
    if parsed.is_none() {
        warn!(key, value = text, "unparseable date bound, ignoring");
    }
    parsed
}

/// Parse RFC 3339 or a plain `YYYY-MM-DD` date.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(28, |last| last.day())
}
