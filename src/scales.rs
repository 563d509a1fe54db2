//! Fixed lookup tables of the default Tailwind theme
//!
//! Everything here is immutable. The only derived table, the pixel -> step
//! reverse map of the spacing scale, is built once on first use.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Spacing steps and their pixel sizes (1 step = 0.25rem = 4px)
pub const SPACING_SCALE: &[(&str, u32)] = &[
    ("0", 0),
    ("1", 4),
    ("2", 8),
    ("3", 12),
    ("4", 16),
    ("5", 20),
    ("6", 24),
    ("7", 28),
    ("8", 32),
    ("9", 36),
    ("10", 40),
    ("11", 44),
    ("12", 48),
    ("14", 56),
    ("16", 64),
    ("20", 80),
    ("24", 96),
    ("28", 112),
    ("32", 128),
    ("36", 144),
    ("40", 160),
    ("44", 176),
    ("48", 192),
    ("52", 208),
    ("56", 224),
    ("60", 240),
    ("64", 256),
    ("72", 288),
    ("80", 320),
    ("96", 384),
];

/// Fractional spacing steps, checked after the whole steps
pub const SPACING_HALF_STEPS: &[(&str, u32)] = &[("0.5", 2), ("1.5", 6), ("2.5", 10)];

static SPACING_PX_TO_STEP: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    SPACING_SCALE
        .iter()
        .map(|&(step, px)| (px, step))
        .collect()
});

pub const RADIUS_SCALE: &[(u32, &str)] = &[
    (0, "rounded-none"),
    (2, "rounded-sm"),
    (4, "rounded"),
    (6, "rounded-md"),
    (8, "rounded-lg"),
    (12, "rounded-xl"),
    (16, "rounded-2xl"),
    (24, "rounded-3xl"),
];

pub const FONT_SIZE_SCALE: &[(u32, &str)] = &[
    (12, "text-xs"),
    (14, "text-sm"),
    (16, "text-base"),
    (18, "text-lg"),
    (20, "text-xl"),
    (24, "text-2xl"),
    (30, "text-3xl"),
    (36, "text-4xl"),
    (48, "text-5xl"),
    (60, "text-6xl"),
    (72, "text-7xl"),
    (96, "text-8xl"),
    (128, "text-9xl"),
];

/// Inclusive upper bounds; anything heavier than the last band is `font-black`
pub const FONT_WEIGHT_BANDS: &[(i64, &str)] = &[
    (300, "font-light"),
    (400, "font-normal"),
    (500, "font-medium"),
    (600, "font-semibold"),
    (700, "font-bold"),
    (800, "font-extrabold"),
];
pub const FONT_WEIGHT_HEAVIEST: &str = "font-black";

pub const FONT_WEIGHT_KEYWORDS: &[(&str, &str)] = &[
    ("normal", "font-normal"),
    ("bold", "font-bold"),
    ("bolder", "font-extrabold"),
    ("lighter", "font-light"),
];

pub const LINE_HEIGHT_KEYWORDS: &[(&str, &str)] = &[
    ("normal", "leading-normal"),
    ("none", "leading-none"),
    ("tight", "leading-tight"),
    ("snug", "leading-snug"),
    ("relaxed", "leading-relaxed"),
    ("loose", "leading-loose"),
];

pub const LETTER_SPACING_KEYWORDS: &[(&str, &str)] = &[
    ("-0.05em", "tracking-tighter"),
    ("-0.025em", "tracking-tight"),
    ("0", "tracking-normal"),
    ("0em", "tracking-normal"),
    ("0.025em", "tracking-wide"),
    ("0.05em", "tracking-wider"),
    ("0.1em", "tracking-widest"),
];

/// Percentages matched within `FRACTION_TOLERANCE` points
pub const FRACTION_SCALE: &[(f64, &str)] = &[
    (25.0, "1/4"),
    (33.333, "1/3"),
    (50.0, "1/2"),
    (66.666, "2/3"),
    (75.0, "3/4"),
    (100.0, "full"),
];
pub const FRACTION_TOLERANCE: f64 = 0.01;

pub const DISPLAY_KEYWORDS: &[(&str, &str)] = &[
    ("flex", "flex"),
    ("block", "block"),
    ("inline", "inline"),
    ("inline-block", "inline-block"),
    ("grid", "grid"),
];

pub const JUSTIFY_CONTENT_KEYWORDS: &[(&str, &str)] = &[
    ("center", "justify-center"),
    ("start", "justify-start"),
    ("end", "justify-end"),
    ("between", "justify-between"),
    ("around", "justify-around"),
    ("evenly", "justify-evenly"),
    ("flex-start", "justify-start"),
    ("flex-end", "justify-end"),
    ("space-between", "justify-between"),
    ("space-around", "justify-around"),
    ("space-evenly", "justify-evenly"),
];

pub const ALIGN_ITEMS_KEYWORDS: &[(&str, &str)] = &[
    ("center", "items-center"),
    ("start", "items-start"),
    ("end", "items-end"),
    ("baseline", "items-baseline"),
    ("stretch", "items-stretch"),
    ("flex-start", "items-start"),
    ("flex-end", "items-end"),
];

pub const FLEX_DIRECTION_KEYWORDS: &[(&str, &str)] = &[
    ("row", "flex-row"),
    ("column", "flex-col"),
    ("row-reverse", "flex-row-reverse"),
    ("column-reverse", "flex-col-reverse"),
];

pub const TEXT_ALIGN_KEYWORDS: &[(&str, &str)] = &[
    ("left", "text-left"),
    ("center", "text-center"),
    ("right", "text-right"),
    ("justify", "text-justify"),
    ("start", "text-start"),
    ("end", "text-end"),
];

/// Exact keyword lookup in one of the tables above.
pub fn lookup_keyword(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// Pixel -> spacing step, whole steps first, then the half steps.
pub fn spacing_step_for_px(px: f64) -> Option<&'static str> {
    let whole = as_table_px(px)?;
    SPACING_PX_TO_STEP.get(&whole).copied().or_else(|| {
        SPACING_HALF_STEPS
            .iter()
            .find(|&&(_, half_px)| half_px == whole)
            .map(|&(step, _)| step)
    })
}

pub fn radius_class_for_px(px: f64) -> Option<&'static str> {
    let whole = as_table_px(px)?;
    RADIUS_SCALE
        .iter()
        .find(|&&(radius_px, _)| radius_px == whole)
        .map(|&(_, class)| class)
}

/// Named font size for a pixel value. Ties resolve to the last matching entry.
pub fn font_size_class_for_px(px: f64) -> Option<&'static str> {
    let whole = as_table_px(px)?;
    FONT_SIZE_SCALE
        .iter()
        .filter(|&&(size_px, _)| size_px == whole)
        .last()
        .map(|&(_, class)| class)
}

pub fn font_weight_class(weight: i64) -> &'static str {
    FONT_WEIGHT_BANDS
        .iter()
        .find(|&&(upper, _)| weight <= upper)
        .map(|&(_, class)| class)
        .unwrap_or(FONT_WEIGHT_HEAVIEST)
}

pub fn fraction_for_percent(percent: f64) -> Option<&'static str> {
    FRACTION_SCALE
        .iter()
        .find(|&&(target, _)| (target - percent).abs() < FRACTION_TOLERANCE)
        .map(|&(_, fraction)| fraction)
}

/// Tables are keyed by whole, non-negative pixels; `-0` counts as `0`.
fn as_table_px(px: f64) -> Option<u32> {
    if px.fract() != 0.0 || px < 0.0 || px > u32::MAX as f64 {
        return None;
    }
    Some(px as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_spacing_scale_is_a_bijection() {
        let mut steps = HashSet::new();
        let mut pixels = HashSet::new();
        for &(step, px) in SPACING_SCALE.iter().chain(SPACING_HALF_STEPS) {
            assert!(steps.insert(step), "duplicate step {}", step);
            assert!(pixels.insert(px), "duplicate pixel size {}", px);
        }
    }

    #[test]
    fn test_spacing_forward_and_reverse_agree() {
        for &(step, px) in SPACING_SCALE.iter().chain(SPACING_HALF_STEPS) {
            assert_eq!(spacing_step_for_px(px as f64), Some(step));
        }
        for &(step, px) in SPACING_SCALE {
            if step != "0" {
                assert_eq!(step.parse::<u32>().unwrap() * 4, px);
            }
        }
    }

    #[test]
    fn test_spacing_misses() {
        assert_eq!(spacing_step_for_px(13.0), None);
        assert_eq!(spacing_step_for_px(4.5), None);
        assert_eq!(spacing_step_for_px(-4.0), None);
        assert_eq!(spacing_step_for_px(-0.0), Some("0"));
    }

    #[test]
    fn test_radius_and_font_size_lookup() {
        assert_eq!(radius_class_for_px(8.0), Some("rounded-lg"));
        assert_eq!(radius_class_for_px(4.0), Some("rounded"));
        assert_eq!(radius_class_for_px(10.0), None);
        assert_eq!(font_size_class_for_px(14.0), Some("text-sm"));
        assert_eq!(font_size_class_for_px(15.0), None);
    }

    #[test]
    fn test_font_weight_bands() {
        assert_eq!(font_weight_class(100), "font-light");
        assert_eq!(font_weight_class(300), "font-light");
        assert_eq!(font_weight_class(301), "font-normal");
        assert_eq!(font_weight_class(600), "font-semibold");
        assert_eq!(font_weight_class(800), "font-extrabold");
        assert_eq!(font_weight_class(900), "font-black");
    }

    #[test]
    fn test_fraction_tolerance() {
        assert_eq!(fraction_for_percent(33.33), Some("1/3"));
        assert_eq!(fraction_for_percent(66.66), Some("2/3"));
        assert_eq!(fraction_for_percent(100.0), Some("full"));
        assert_eq!(fraction_for_percent(33.0), None);
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(lookup_keyword(JUSTIFY_CONTENT_KEYWORDS, "space-between"), Some("justify-between"));
        assert_eq!(lookup_keyword(DISPLAY_KEYWORDS, "contents"), None);
        assert_eq!(lookup_keyword(LETTER_SPACING_KEYWORDS, "0"), Some("tracking-normal"));
        assert_eq!(lookup_keyword(LETTER_SPACING_KEYWORDS, "0em"), Some("tracking-normal"));
    }
}
