//! Collects handler output into the final [`ConversionResult`]

use crate::resolver::PropertyOutput;
use crate::types::{join_classes, ClassList, ConfigEntry, ConversionConfig, ConversionOptions, ConversionResult};
use indexmap::IndexSet;

/// Accumulates buckets across the declarations of one conversion run
#[derive(Debug, Default)]
pub struct Aggregator {
    utilities: ClassList,
    singles: ClassList,
    arbitrary: ClassList,
    notes: Vec<String>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, output: PropertyOutput) {
        for class in output.utilities {
            self.utilities.insert(class);
        }
        for class in output.singles {
            self.singles.insert(class);
        }
        for class in output.arbitrary {
            self.arbitrary.insert(class);
        }
        if let Some(note) = output.note {
            self.notes.push(note);
        }
    }

    pub fn finish(self, config: &ConversionConfig, options: &ConversionOptions) -> ConversionResult {
        let apply_snippet = build_apply_snippet(&self.utilities, options);
        let utilities = self.utilities;
        let mut arbitrary = self.arbitrary;
        arbitrary.retain(|class| !utilities.contains(class));

        ConversionResult {
            utilities,
            singles: self.singles,
            arbitrary,
            apply_snippet,
            config: build_config_entries(config),
            notes: self.notes,
        }
    }
}

/// `@layer <layer> { .<class> { @apply ...; } }`, or empty without utilities.
pub fn build_apply_snippet(utilities: &ClassList, options: &ConversionOptions) -> String {
    if utilities.is_empty() {
        return String::new();
    }
    format!(
        "@layer {} {{\n  .{} {{\n    @apply {};\n  }}\n}}",
        options.layer,
        options.class_name,
        join_classes(utilities)
    )
}

/// Theme-extension suggestions, one entry per non-empty category.
pub fn build_config_entries(config: &ConversionConfig) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();

    if !config.spacing.is_empty() {
        entries.push(pixel_entry("spacing", &config.spacing));
    }
    if !config.radius.is_empty() {
        entries.push(pixel_entry("borderRadius", &config.radius));
    }
    if !config.colors.is_empty() {
        let mut entry = ConfigEntry::new("colors");
        for color in &config.colors {
            entry.value.insert(color_key(color), color.clone());
        }
        entries.push(entry);
    }

    entries
}

fn pixel_entry(key: &str, literals: &IndexSet<String>) -> ConfigEntry {
    let mut entry = ConfigEntry::new(key);
    for literal in literals {
        entry.value.insert(literal.clone(), literal.clone());
    }
    entry
}

/// Color literal with everything but ASCII letters and digits removed
pub fn color_key(color: &str) -> String {
    color.chars().filter(char::is_ascii_alphanumeric).collect()
}
