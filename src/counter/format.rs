use super::parse::ParsedValue;

/// Renders `magnitude` back into the shape of `parsed`.
///
/// Fixed-point with the source's decimal places, otherwise a rounded whole
/// number. Thousands separators from the source token are not reproduced;
/// the settled frame shows the raw string instead.
pub fn format(parsed: &ParsedValue, magnitude: f64) -> String {
    let number = if parsed.decimals() > 0 {
        format!("{:.*}", parsed.decimals(), magnitude)
    } else {
        format!("{:.0}", magnitude.round())
    };
    format!("{}{}{}", parsed.prefix(), number, parsed.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::parse::parse;

    #[test]
    fn test_whole_numbers_round() {
        let parsed = parse("$450M").unwrap();
        assert_eq!(format(&parsed, 0.0), "$0M");
        assert_eq!(format(&parsed, 224.4), "$224M");
        assert_eq!(format(&parsed, 224.5), "$225M");
        assert_eq!(format(&parsed, 450.0), "$450M");
    }

    #[test]
    fn test_fixed_decimals() {
        let parsed = parse("99.9%").unwrap();
        assert_eq!(format(&parsed, 0.0), "0.0%");
        assert_eq!(format(&parsed, 42.04), "42.0%");
        assert_eq!(format(&parsed, 99.9), "99.9%");
    }

    #[test]
    fn test_separators_are_not_reintroduced() {
        let parsed = parse("1,250 lots").unwrap();
        assert_eq!(format(&parsed, 1250.0), "1250 lots");
    }

    #[test]
    fn test_large_values_stay_out_of_scientific_notation() {
        let parsed = parse("12345678901234567890").unwrap();
        let rendered = format(&parsed, parsed.value());
        assert!(!rendered.contains('e'));
        assert!(rendered.starts_with("1234567890123456"));
    }

    #[test]
    fn test_same_input_formats_the_same() {
        let parsed = parse("10–30%").unwrap();
        assert_eq!(format(&parsed, 7.3), format(&parsed, 7.3));
        assert_eq!(format(&parsed, 7.3), "7–30%");
    }
}
