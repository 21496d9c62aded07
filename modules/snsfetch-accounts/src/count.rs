// Locale-aware parsing of abbreviated follower counts ("11万", "831K", "1,234").
//
// Parsing is lenient: anything that does not parse yields 0, so a genuine
// zero and an unparseable count look the same.

/// Magnitude suffixes, checked in order. The first suffix present in the text
/// decides the multiplier; the classes never combine.
const COUNT_SUFFIXES: &[(&[char], f64)] = &[
    (&['万', '萬'], 10_000.0),
    (&['K'], 1_000.0),
    (&['M'], 1_000_000.0),
];

/// YouTube's Japanese UI uses 万 and 億, never Latin abbreviations.
const YOUTUBE_SUFFIXES: &[(&[char], f64)] = &[
    (&['億'], 100_000_000.0),
    (&['万'], 10_000.0),
];

/// Labels and units wrapped around YouTube's header counts.
const YOUTUBE_LABELS: &[&str] = &["チャンネル登録者数", "動画"];
const YOUTUBE_UNITS: &[char] = &['人', '本'];

/// Parse a count like "1,234", "831K", "1.5M", "24萬" or "1.5万".
pub fn parse_count(text: &str) -> u64 {
    parse_with_suffixes(text, COUNT_SUFFIXES)
}

/// Parse a count taken from a YouTube channel header, e.g.
/// "チャンネル登録者数 11万人" or "動画 1234 本".
pub fn parse_youtube_count(text: &str) -> u64 {
    let mut rest = text.trim();
    for label in YOUTUBE_LABELS {
        if let Some(stripped) = rest.strip_prefix(label) {
            rest = stripped;
            break;
        }
    }
    let rest = rest.trim().trim_end_matches(YOUTUBE_UNITS);
    parse_with_suffixes(rest, YOUTUBE_SUFFIXES)
}

fn parse_with_suffixes(text: &str, suffixes: &[(&[char], f64)]) -> u64 {
    let cleaned = text.trim().replace(',', "");

    for (chars, multiplier) in suffixes {
        if cleaned.contains(*chars) {
            let number = cleaned.replace(*chars, "");
            return scale(number.trim(), *multiplier);
        }
    }

    cleaned.parse::<u64>().unwrap_or(0)
}

/// Decimal times multiplier, truncated toward zero. Products within 1e-6 of
/// an integer are rounded instead, so "0.29万" is 2900 where plain truncation
/// of the float product would give 2899.
fn scale(number: &str, multiplier: f64) -> u64 {
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            // Round away float noise first: 1.1 * 10_000 is 11000.000000000002
            // and 0.29 * 10_000 is 2899.9999999999995.
            let scaled = value * multiplier;
            let nearest = scaled.round();
            if (scaled - nearest).abs() < 1e-6 {
                nearest as u64
            } else {
                scaled.trunc() as u64
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_count("1234"), 1234);
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count(" 42 "), 42);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(parse_count("1,234"), 1234);
        assert_eq!(parse_count("111,402"), 111_402);
        assert_eq!(parse_count("1,234,567"), 1_234_567);
    }

    #[test]
    fn cjk_ten_thousands() {
        assert_eq!(parse_count("11万"), 110_000);
        assert_eq!(parse_count("1.5万"), 15_000);
        assert_eq!(parse_count("24萬"), 240_000);
        assert_eq!(parse_count("2.9萬"), 29_000);
    }

    #[test]
    fn latin_abbreviations() {
        assert_eq!(parse_count("831K"), 831_000);
        assert_eq!(parse_count("1.5M"), 1_500_000);
        assert_eq!(parse_count("1.2K"), 1_200);
        assert_eq!(parse_count("12.3M"), 12_300_000);
    }

    #[test]
    fn fractional_values_truncate() {
        assert_eq!(parse_count("1.2345K"), 1_234);
        assert_eq!(parse_count("0.00001万"), 0);
    }

    #[test]
    fn float_noise_rounds_to_the_intended_integer() {
        // 0.29 * 10_000 is 2899.9999999999995 as f64.
        assert_eq!(parse_count("0.29万"), 2_900);
        assert_eq!(parse_count("1.1万"), 11_000);
        assert_eq!(parse_youtube_count("チャンネル登録者数 0.29万人"), 2_900);
    }

    #[test]
    fn suffixes_are_case_sensitive() {
        assert_eq!(parse_count("831k"), 0);
        assert_eq!(parse_count("1.5m"), 0);
    }

    #[test]
    fn cjk_takes_precedence_over_latin() {
        // 万 is checked first; the leftover "K" makes the remainder unparseable.
        assert_eq!(parse_count("1K万"), 0);
    }

    #[test]
    fn malformed_input_is_zero() {
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("K"), 0);
        assert_eq!(parse_count("1.5"), 0);
        assert_eq!(parse_count("-5K"), 0);
        assert_eq!(parse_count("infK"), 0);
        assert_eq!(parse_count("NaN万"), 0);
    }

    #[test]
    fn youtube_subscriber_label() {
        assert_eq!(parse_youtube_count("チャンネル登録者数 11万人"), 110_000);
        assert_eq!(parse_youtube_count("チャンネル登録者数 1.23万人"), 12_300);
        assert_eq!(parse_youtube_count("チャンネル登録者数 3.4億人"), 340_000_000);
        assert_eq!(parse_youtube_count("チャンネル登録者数 8,510人"), 8_510);
    }

    #[test]
    fn youtube_video_label() {
        assert_eq!(parse_youtube_count("動画 1234 本"), 1234);
        assert_eq!(parse_youtube_count("動画 1.2万 本"), 12_000);
    }

    #[test]
    fn youtube_ignores_latin_suffixes() {
        assert_eq!(parse_youtube_count("1.5M"), 0);
        assert_eq!(parse_youtube_count("831K"), 0);
    }
}
