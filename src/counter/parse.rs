use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only: `\d` would also match other Unicode digits.
static NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9,.]+").expect("numeric run pattern is valid"));

/// A display string split around its first numeric token.
///
/// The token boundaries are byte offsets into the owned raw string, so
/// `prefix() + numeric_token() + suffix()` always rebuilds the source text.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedValue {
    raw: String,
    start: usize,
    end: usize,
    value: f64,
    decimals: usize,
}

impl ParsedValue {
    /// Splits `raw` at its first maximal run of digits, commas and dots.
    ///
    /// Returns `None` when there is no such run, or when the run does not
    /// read as a finite number once the commas are dropped (`"1.2.3"`,
    /// `"."`). Either way the caller shows `raw` as static text.
    pub fn parse(raw: &str) -> Option<Self> {
        let run = NUMERIC_RUN.find(raw)?;
        let token = run.as_str();

        let value = token
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())?;

        let decimals = token
            .split_once('.')
            .map(|(_, fraction)| fraction.len())
            .unwrap_or(0);

        Some(Self {
            raw: raw.to_string(),
            start: run.start(),
            end: run.end(),
            value,
            decimals,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.raw[..self.start]
    }

    #[cfg(test)]
    pub fn numeric_token(&self) -> &str {
        &self.raw[self.start..self.end]
    }

    pub fn suffix(&self) -> &str {
        &self.raw[self.end..]
    }

    /// Magnitude of the token with thousands separators removed.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Digits after the first decimal point, 0 for whole numbers.
    pub fn decimals(&self) -> usize {
        self.decimals
    }
}

pub fn parse(raw: &str) -> Option<ParsedValue> {
    ParsedValue::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_currency_with_unit_suffix() {
        let parsed = parse("$450M").unwrap();
        assert_eq!(parsed.prefix(), "$");
        assert_eq!(parsed.numeric_token(), "450");
        assert_eq!(parsed.suffix(), "M");
        assert_eq!(parsed.value(), 450.0);
        assert_eq!(parsed.decimals(), 0);
    }

    #[test]
    fn test_range_animates_first_number_only() {
        let parsed = parse("10–30%").unwrap();
        assert_eq!(parsed.prefix(), "");
        assert_eq!(parsed.numeric_token(), "10");
        assert_eq!(parsed.suffix(), "–30%");
        assert_eq!(parsed.value(), 10.0);
    }

    #[test]
    fn test_decimal_percentage() {
        let parsed = parse("99.9%").unwrap();
        assert_eq!(parsed.value(), 99.9);
        assert_eq!(parsed.decimals(), 1);
        assert_eq!(parsed.suffix(), "%");
    }

    #[test]
    fn test_thousands_shorthand() {
        let parsed = parse("40k+").unwrap();
        assert_eq!(parsed.prefix(), "");
        assert_eq!(parsed.suffix(), "k+");
        assert_eq!(parsed.value(), 40.0);
        assert_eq!(parsed.decimals(), 0);
    }

    #[test]
    fn test_thousands_separators_are_dropped_from_value() {
        let parsed = parse("1,250,000 drivers").unwrap();
        assert_eq!(parsed.numeric_token(), "1,250,000");
        assert_eq!(parsed.value(), 1_250_000.0);
        assert_eq!(parsed.decimals(), 0);
    }

    #[test]
    fn test_no_digits_is_static() {
        assert_eq!(parse("N/A"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_malformed_token_is_static() {
        assert_eq!(parse("v1.2.3"), None);
        assert_eq!(parse("..."), None);
        assert_eq!(parse("a, b"), None);
    }

    #[test]
    fn test_leading_and_trailing_dots_still_read() {
        let parsed = parse(".5x").unwrap();
        assert_eq!(parsed.value(), 0.5);
        assert_eq!(parsed.decimals(), 1);

        let parsed = parse("40.").unwrap();
        assert_eq!(parsed.value(), 40.0);
        assert_eq!(parsed.decimals(), 0);
    }

    #[test]
    fn test_multibyte_prefix_keeps_char_boundaries() {
        let parsed = parse("≈€12.50/h").unwrap();
        assert_eq!(parsed.prefix(), "≈€");
        assert_eq!(parsed.numeric_token(), "12.50");
        assert_eq!(parsed.suffix(), "/h");
        assert_eq!(parsed.decimals(), 2);
    }

    proptest! {
        #[test]
        fn prop_split_rebuilds_raw(
            prefix in "[^0-9,.]{0,8}",
            token in "[0-9]{1,6}(\\.[0-9]{1,3})?",
            suffix in "([^0-9,.][^\n]{0,8})?",
        ) {
            let raw = format!("{prefix}{token}{suffix}");
            let parsed = parse(&raw).unwrap();
            prop_assert_eq!(parsed.prefix(), prefix.as_str());
            prop_assert_eq!(parsed.numeric_token(), token.as_str());
            prop_assert_eq!(parsed.suffix(), suffix.as_str());
            let rebuilt = format!("{}{}{}", parsed.prefix(), parsed.numeric_token(), parsed.suffix());
            prop_assert_eq!(rebuilt, raw);
        }

        #[test]
        fn prop_parse_is_idempotent(raw in "\\PC{0,16}") {
            prop_assert_eq!(parse(&raw), parse(&raw));
        }
    }
}
