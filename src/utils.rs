//! Value normalizers shared by the property handlers

use once_cell::sync::Lazy;
use regex::Regex;

static PIXEL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(-?[0-9]*\.?[0-9]+)(px)?").unwrap());
static FLOAT_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap());
static UNITLESS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap());

/// Extract the first numeric token of a value as a pixel quantity.
///
/// The unit is not checked: `1.5em` yields `1.5` just like `1.5px`. Callers that
/// care about units must guard for themselves.
pub fn to_pixels(value: &str) -> Option<f64> {
    let captures = PIXEL_REGEX.captures(value.trim())?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

/// Parse the leading float of a string, ignoring whatever follows (`33.33%` -> 33.33).
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let found = FLOAT_PREFIX_REGEX.find(value.trim_start())?;
    found.as_str().parse::<f64>().ok()
}

/// Parse the leading base-10 integer of a string (`600`, `-5`, `700abc`).
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// True for bare unitless numbers such as `0`, `2` or `1.25`.
pub fn is_unitless_number(value: &str) -> bool {
    UNITLESS_REGEX.is_match(value)
}

/// Render a pixel quantity the way it appears in class names: `12`, `4.5`, never `-0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// The four sides of a box shorthand, still as raw value strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSides<'a> {
    pub top: &'a str,
    pub right: &'a str,
    pub bottom: &'a str,
    pub left: &'a str,
}

impl<'a> BoxSides<'a> {
    /// Sides in `top, right, bottom, left` order
    pub fn to_array(&self) -> [&'a str; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Expand a CSS box shorthand (`padding`, `margin`) into its four sides.
///
/// Tokens past the fourth are ignored. Returns `None` for an empty value.
pub fn parse_box_shorthand(value: &str) -> Option<BoxSides<'_>> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let sides = match parts[..] {
        [] => return None,
        [all] => BoxSides { top: all, right: all, bottom: all, left: all },
        [vertical, horizontal] => BoxSides {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        },
        [top, horizontal, bottom] => BoxSides {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        },
        [top, right, bottom, left, ..] => BoxSides { top, right, bottom, left },
    };
    Some(sides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels() {
        assert_eq!(to_pixels("16px"), Some(16.0));
        assert_eq!(to_pixels("16PX"), Some(16.0));
        assert_eq!(to_pixels("12"), Some(12.0));
        assert_eq!(to_pixels("-8px"), Some(-8.0));
        assert_eq!(to_pixels(".5px"), Some(0.5));
        assert_eq!(to_pixels("auto"), None);
        assert_eq!(to_pixels("normal"), None);
        assert_eq!(to_pixels(""), None);
    }

    #[test]
    fn test_to_pixels_ignores_unit() {
        assert_eq!(to_pixels("1.5em"), Some(1.5));
        assert_eq!(to_pixels("2rem"), Some(2.0));
        assert_eq!(to_pixels("50%"), Some(50.0));
        assert_eq!(to_pixels("calc(100% - 10px)"), Some(100.0));
    }

    #[test]
    fn test_only_ascii_digits_count() {
        assert_eq!(to_pixels("\u{0661}4px"), Some(4.0));
        assert_eq!(to_pixels("\u{0663}\u{0662}px"), None);
        assert_eq!(parse_float_prefix("\u{0665}0%"), None);
        assert!(!is_unitless_number("\u{0661}\u{0662}"));
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("33.33%"), Some(33.33));
        assert_eq!(parse_float_prefix("100%"), Some(100.0));
        assert_eq!(parse_float_prefix("abc%"), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("600"), Some(600));
        assert_eq!(parse_leading_int("700abc"), Some(700));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("450.7"), Some(450));
        assert_eq!(parse_leading_int("bold"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_unitless_number() {
        assert!(is_unitless_number("0"));
        assert!(is_unitless_number("1.25"));
        assert!(!is_unitless_number("1.25px"));
        assert!(!is_unitless_number(".5"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_box_shorthand_expansion() {
        let one = parse_box_shorthand("4px").unwrap();
        assert_eq!(one.to_array(), ["4px", "4px", "4px", "4px"]);

        let two = parse_box_shorthand("12px 16px").unwrap();
        assert_eq!(two.to_array(), ["12px", "16px", "12px", "16px"]);

        let three = parse_box_shorthand("1px 2px 3px").unwrap();
        assert_eq!(three.to_array(), ["1px", "2px", "3px", "2px"]);

        let four = parse_box_shorthand("1px 2px 3px 4px 5px").unwrap();
        assert_eq!(four.to_array(), ["1px", "2px", "3px", "4px"]);

        assert!(parse_box_shorthand("   ").is_none());
    }
}
