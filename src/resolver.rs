//! Property handlers: map one CSS declaration to Tailwind utility classes
//!
//! Dispatch is a closed match over [`PropertyKind`]; anything not listed there
//! falls through to an arbitrary-property class plus an advisory note.

use crate::scales::{self, lookup_keyword};
use crate::types::{ConversionConfig, Declaration};
use crate::utils::{
    format_number, is_unitless_number, parse_box_shorthand, parse_float_prefix, parse_leading_int,
    to_pixels,
};
use std::fmt;

/// Every property family the converter knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Display,
    JustifyContent,
    AlignItems,
    FlexDirection,
    TextAlign,
    Gap,
    Padding,
    Margin,
    Width,
    Height,
    BackgroundColor,
    Color,
    Border,
    BorderRadius,
    BoxShadow,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Unknown,
}

impl PropertyKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "display" => Self::Display,
            "justify-content" => Self::JustifyContent,
            "align-items" => Self::AlignItems,
            "flex-direction" => Self::FlexDirection,
            "text-align" => Self::TextAlign,
            "gap" => Self::Gap,
            "padding" => Self::Padding,
            "margin" => Self::Margin,
            "width" => Self::Width,
            "height" => Self::Height,
            "background-color" => Self::BackgroundColor,
            "color" => Self::Color,
            "border" => Self::Border,
            "border-radius" => Self::BorderRadius,
            "box-shadow" => Self::BoxShadow,
            "font-size" => Self::FontSize,
            "font-weight" => Self::FontWeight,
            "line-height" => Self::LineHeight,
            "letter-spacing" => Self::LetterSpacing,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::JustifyContent => "justify-content",
            Self::AlignItems => "align-items",
            Self::FlexDirection => "flex-direction",
            Self::TextAlign => "text-align",
            Self::Gap => "gap",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "background-color",
            Self::Color => "color",
            Self::Border => "border",
            Self::BorderRadius => "border-radius",
            Self::BoxShadow => "box-shadow",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::LetterSpacing => "letter-spacing",
            Self::Unknown => "unknown",
        }
    }

}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classes produced by one declaration, already routed to their buckets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOutput {
    pub utilities: Vec<String>,
    pub singles: Vec<String>,
    pub arbitrary: Vec<String>,
    pub note: Option<String>,
}

impl PropertyOutput {
    /// A scale or keyword match standing for the whole declaration
    fn exact(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            utilities: vec![class.clone()],
            singles: vec![class],
            ..Self::default()
        }
    }

    fn utility(class: impl Into<String>) -> Self {
        Self {
            utilities: vec![class.into()],
            ..Self::default()
        }
    }

    fn arbitrary(class: impl Into<String>) -> Self {
        Self {
            arbitrary: vec![class.into()],
            ..Self::default()
        }
    }

    /// Listed as a utility and kept verbatim as an arbitrary value
    fn utility_and_arbitrary(class: impl Into<String>) -> Self {
        let class = class.into();
        Self {
            utilities: vec![class.clone()],
            arbitrary: vec![class],
            ..Self::default()
        }
    }

    fn push_spacing(&mut self, class: SpacingClass) {
        match class {
            SpacingClass::Scale(class) => self.utilities.push(class),
            SpacingClass::Arbitrary(class) => self.arbitrary.push(class),
        }
    }
}

/// `[property:value]`, Tailwind's escape hatch for any declaration
pub fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", property, value)
}

fn pixel_literal(px: f64) -> String {
    format!("{}px", format_number(px))
}

/// Resolve one declaration, recording out-of-scale values into `config`.
pub fn resolve_declaration(declaration: &Declaration, config: &mut ConversionConfig) -> PropertyOutput {
    let kind = PropertyKind::from_name(&declaration.property);
    let value = declaration.value.as_str();
    log::trace!("Resolving {} as {:?}", declaration, kind);

    match kind {
        PropertyKind::Display => resolve_display(value),
        PropertyKind::JustifyContent => {
            resolve_keyword(kind, scales::JUSTIFY_CONTENT_KEYWORDS, value)
        }
        PropertyKind::AlignItems => resolve_keyword(kind, scales::ALIGN_ITEMS_KEYWORDS, value),
        PropertyKind::FlexDirection => {
            resolve_keyword(kind, scales::FLEX_DIRECTION_KEYWORDS, value)
        }
        PropertyKind::TextAlign => resolve_keyword(kind, scales::TEXT_ALIGN_KEYWORDS, value),
        PropertyKind::Gap => resolve_gap(value, config),
        PropertyKind::Padding => resolve_box(kind, "p", value, config),
        PropertyKind::Margin => resolve_box(kind, "m", value, config),
        PropertyKind::Width => resolve_dimension("w", value, config),
        PropertyKind::Height => resolve_dimension("h", value, config),
        PropertyKind::BackgroundColor => resolve_color("bg", value, config),
        PropertyKind::Color => resolve_color("text", value, config),
        PropertyKind::Border => resolve_border(value),
        PropertyKind::BorderRadius => resolve_radius(value, config),
        PropertyKind::BoxShadow => {
            PropertyOutput::utility_and_arbitrary(arbitrary_property(kind.name(), value))
        }
        PropertyKind::FontSize => resolve_font_size(value),
        PropertyKind::FontWeight => resolve_font_weight(value),
        PropertyKind::LineHeight => resolve_line_height(value),
        PropertyKind::LetterSpacing => resolve_letter_spacing(value),
        PropertyKind::Unknown => resolve_unknown(&declaration.property, value),
    }
}

fn resolve_display(value: &str) -> PropertyOutput {
    match lookup_keyword(scales::DISPLAY_KEYWORDS, value) {
        Some(class) => PropertyOutput::exact(class),
        None => PropertyOutput::arbitrary(arbitrary_property("display", value)),
    }
}

/// Keyword families whose fallback still counts as a utility
fn resolve_keyword(
    kind: PropertyKind,
    table: &'static [(&'static str, &'static str)],
    value: &str,
) -> PropertyOutput {
    match lookup_keyword(table, value) {
        Some(class) => PropertyOutput::exact(class),
        None => PropertyOutput::utility(arbitrary_property(kind.name(), value)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SpacingClass {
    Scale(String),
    Arbitrary(String),
}

/// Map a length onto the spacing scale, e.g. `("pt", "12px")` -> `pt-3`.
fn spacing_class(prefix: &str, value: &str, config: &mut ConversionConfig) -> SpacingClass {
    let Some(px) = to_pixels(value) else {
        return SpacingClass::Arbitrary(format!("{}-[{}]", prefix, value));
    };

    if let Some(step) = scales::spacing_step_for_px(px) {
        return SpacingClass::Scale(format!("{}-{}", prefix, step));
    }

    let literal = pixel_literal(px);
    let class = format!("{}-[{}]", prefix, literal);
    config.spacing.insert(literal);
    SpacingClass::Arbitrary(class)
}

fn resolve_gap(value: &str, config: &mut ConversionConfig) -> PropertyOutput {
    match spacing_class("gap", value, config) {
        SpacingClass::Scale(class) => PropertyOutput::exact(class),
        SpacingClass::Arbitrary(class) => PropertyOutput::arbitrary(class),
    }
}

/// Padding or margin shorthand, one class per side. An empty value becomes `[padding:]`.
fn resolve_box(
    kind: PropertyKind,
    prefix: &str,
    value: &str,
    config: &mut ConversionConfig,
) -> PropertyOutput {
    let Some(sides) = parse_box_shorthand(value) else {
        log::debug!("Empty {} shorthand kept as an arbitrary property", kind);
        return PropertyOutput::arbitrary(arbitrary_property(kind.name(), value));
    };

    let mut output = PropertyOutput::default();
    for (side, side_value) in ["t", "r", "b", "l"].iter().zip(sides.to_array()) {
        let side_prefix = format!("{}{}", prefix, side);
        output.push_spacing(spacing_class(&side_prefix, side_value, config));
    }
    output
}

fn resolve_dimension(prefix: &str, value: &str, config: &mut ConversionConfig) -> PropertyOutput {
    if value.ends_with('%') {
        let fraction = parse_float_prefix(value).and_then(scales::fraction_for_percent);
        return match fraction {
            Some(fraction) => PropertyOutput::exact(format!("{}-{}", prefix, fraction)),
            None => PropertyOutput::utility(format!("{}-[{}]", prefix, value)),
        };
    }

    match spacing_class(prefix, value, config) {
        SpacingClass::Scale(class) => PropertyOutput::exact(class),
        SpacingClass::Arbitrary(class) => PropertyOutput::utility(class),
    }
}

fn color_class(prefix: &str, value: &str) -> String {
    format!("{}-[{}]", prefix, value.trim())
}

fn resolve_color(prefix: &str, value: &str, config: &mut ConversionConfig) -> PropertyOutput {
    config.colors.insert(value.trim().to_string());
    PropertyOutput::utility_and_arbitrary(color_class(prefix, value))
}

fn is_color_token(token: &str) -> bool {
    token.starts_with('#') || token.contains("rgb") || token.contains("hsl")
}

/// `border: <width> <style> <color>`, read token by token. The style is ignored.
fn resolve_border(value: &str) -> PropertyOutput {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let width = tokens.iter().find(|token| token.ends_with("px"));
    let color = tokens.iter().find(|token| is_color_token(token));

    let mut output = PropertyOutput::default();
    let width_class = match width {
        Some(token) => match to_pixels(token) {
            Some(px) if px == 0.0 => "border-0".to_string(),
            Some(px) if px == 1.0 => "border".to_string(),
            Some(px) => format!("border-[{}px]", format_number(px)),
            None => format!("border-[{}]", token),
        },
        None => "border".to_string(),
    };
    output.utilities.push(width_class);

    if let Some(color) = color {
        output.utilities.push(color_class("border", color));
    }
    output
}

fn resolve_radius(value: &str, config: &mut ConversionConfig) -> PropertyOutput {
    let Some(px) = to_pixels(value) else {
        return PropertyOutput::utility(format!("rounded-[{}]", value));
    };

    match scales::radius_class_for_px(px) {
        Some(class) => PropertyOutput::exact(class),
        None => {
            let literal = pixel_literal(px);
            let class = format!("rounded-[{}]", literal);
            config.radius.insert(literal);
            PropertyOutput::utility(class)
        }
    }
}

fn resolve_font_size(value: &str) -> PropertyOutput {
    let Some(px) = to_pixels(value) else {
        return PropertyOutput::arbitrary(arbitrary_property("font-size", value));
    };

    match scales::font_size_class_for_px(px) {
        Some(class) => PropertyOutput::exact(class),
        None => PropertyOutput::utility(format!("text-[{}px]", format_number(px))),
    }
}

fn resolve_font_weight(value: &str) -> PropertyOutput {
    let class = match parse_leading_int(value) {
        Some(weight) => Some(scales::font_weight_class(weight)),
        None => lookup_keyword(scales::FONT_WEIGHT_KEYWORDS, value),
    };

    match class {
        Some(class) => PropertyOutput::exact(class),
        None => PropertyOutput::arbitrary(arbitrary_property("font-weight", value)),
    }
}

fn resolve_line_height(value: &str) -> PropertyOutput {
    if let Some(class) = lookup_keyword(scales::LINE_HEIGHT_KEYWORDS, value) {
        return PropertyOutput::exact(class);
    }

    // a zero extraction falls through to the unitless branch
    match to_pixels(value) {
        Some(px) if px != 0.0 => {
            PropertyOutput::utility(format!("leading-[{}px]", format_number(px)))
        }
        _ if is_unitless_number(value) => PropertyOutput::utility(format!("leading-[{}]", value)),
        _ => PropertyOutput::arbitrary(arbitrary_property("line-height", value)),
    }
}

fn resolve_letter_spacing(value: &str) -> PropertyOutput {
    match lookup_keyword(scales::LETTER_SPACING_KEYWORDS, value) {
        Some(class) => PropertyOutput::exact(class),
        None => PropertyOutput::utility(format!("tracking-[{}]", value)),
    }
}

fn resolve_unknown(property: &str, value: &str) -> PropertyOutput {
    log::warn!("No direct utility for '{}', falling back to an arbitrary property", property);
    let mut output = PropertyOutput::arbitrary(arbitrary_property(property, value));
    output.note = Some(format!(
        "No direct utility for \"{}\", used arbitrary property.",
        property
    ));
    output
}
