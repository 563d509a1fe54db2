//! Presentation of a [`ConversionResult`] for terminals and other tools

use crate::error::{ConverterError, Result};
use crate::types::{join_classes, ConfigEntry, ConversionResult};
use std::fmt::Write;

const NO_CONFIG_MESSAGE: &str = "No custom config required. All values fit Tailwind's defaults.";

/// Config-extension stub in `tailwind.config.js` shape, with unquoted keys.
pub fn render_config_stub(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    out.push_str("// tailwind.config.js\n");
    out.push_str("module.exports = {\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");
    for entry in entries {
        let _ = writeln!(out, "      {}: {{", entry.key);
        for (key, value) in &entry.value {
            let _ = writeln!(out, "        {}: {},", stub_key(key), quote(value));
        }
        out.push_str("      },\n");
    }
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push('}');
    out
}

/// Keys print bare unless they carry quotes or parentheses.
fn stub_key(key: &str) -> String {
    if key.is_empty() || key.contains(['"', '(', ')']) {
        quote(key)
    } else {
        key.to_string()
    }
}

fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

fn section(out: &mut String, title: &str, body: &str, placeholder: &str) {
    let _ = writeln!(out, "== {} ==", title);
    if body.is_empty() {
        let _ = writeln!(out, "{}", placeholder);
    } else {
        let _ = writeln!(out, "{}", body);
    }
    out.push('\n');
}

/// Human-readable report with one section per bucket.
pub fn render_text(result: &ConversionResult) -> String {
    let mut out = String::new();

    section(
        &mut out,
        "Multi-utility recommendation",
        &join_classes(&result.utilities),
        "/* Utilities will appear here */",
    );
    section(
        &mut out,
        "Single-property matches",
        &join_classes(&result.singles),
        "/* Single-property utilities */",
    );
    section(
        &mut out,
        "Arbitrary utilities (exact values)",
        &join_classes(&result.arbitrary),
        "/* Arbitrary utilities (like bg-[#1f2937]) */",
    );
    section(
        &mut out,
        "Custom class with @apply",
        &result.apply_snippet,
        "/* @layer components { .my-class { @apply ... } } */",
    );

    let _ = writeln!(out, "== Tailwind config suggestions ==");
    if result.config.is_empty() {
        let _ = writeln!(out, "{}", NO_CONFIG_MESSAGE);
    } else {
        let _ = writeln!(out, "Consider extending your theme for these custom values:");
        let _ = writeln!(out, "{}", render_config_stub(&result.config));
    }

    if !result.notes.is_empty() {
        out.push('\n');
        for note in &result.notes {
            let _ = writeln!(out, "- {}", note);
        }
    }

    out
}

/// Only the space-joined utilities, ready to paste into a `class` attribute.
pub fn render_classes(result: &ConversionResult) -> String {
    join_classes(&result.utilities)
}

pub fn render_json(result: &ConversionResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| ConverterError::InvalidFormat {
        message: format!("Failed to serialize result: {}", e),
    })
}
