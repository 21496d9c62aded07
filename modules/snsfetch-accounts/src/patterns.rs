// Ordered locale pattern tables for counts embedded in free text
// (og:description and friends). Patterns are tried in order; the first one
// that matches wins, and its first capture group goes through `parse_count`.

use std::sync::LazyLock;

use regex::Regex;

use crate::count::parse_count;

pub struct CountPattern {
    pub locale: &'static str,
    pub regex: &'static LazyLock<Regex>,
}

/// A count found in text, with the locale of the pattern that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMatch {
    pub locale: &'static str,
    pub value: u64,
}

pub fn first_count(patterns: &[CountPattern], text: &str) -> Option<CountMatch> {
    patterns.iter().find_map(|pattern| {
        let caps = pattern.regex.captures(text)?;
        let raw = caps.get(1)?.as_str();
        Some(CountMatch {
            locale: pattern.locale,
            value: parse_count(raw),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static RE_EN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([\d,.KM]+)\s+apples").unwrap());
    static RE_JA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"りんご([\d,.KM万]+)個").unwrap());

    const APPLES: &[CountPattern] = &[
        CountPattern { locale: "en", regex: &RE_EN },
        CountPattern { locale: "ja", regex: &RE_JA },
    ];

    #[test]
    fn first_pattern_wins() {
        let found = first_count(APPLES, "1.5K apples, りんご3個").unwrap();
        assert_eq!(found, CountMatch { locale: "en", value: 1_500 });
    }

    #[test]
    fn falls_through_to_later_locale() {
        let found = first_count(APPLES, "りんご2.5万個").unwrap();
        assert_eq!(found, CountMatch { locale: "ja", value: 25_000 });
    }

    #[test]
    fn no_match() {
        assert_eq!(first_count(APPLES, "bananas"), None);
    }
}
