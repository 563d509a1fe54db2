//! CSS to Tailwind converter
//!
//! Turns a block of raw CSS declarations into equivalent Tailwind utility
//! classes, a reusable `@apply` snippet and theme-extension hints for values
//! that fall outside the default scales.
//!
//! # Basic Usage
//!
//! ```rust
//! use twconv::{convert, join_classes};
//!
//! let result = convert(".btn { display: flex; padding: 12px 16px; }");
//! assert_eq!(join_classes(&result.utilities), "flex pt-3 pr-4 pb-3 pl-4");
//! ```
//!
//! # Conversion Pipeline
//!
//! 1. **Parser** - Strip comments, pull `property: value` pairs out of the rule body
//! 2. **Normalizers** - Read pixels, percentages and box shorthands out of values
//! 3. **Resolver** - Map each declaration to scale classes or arbitrary values
//! 4. **Aggregator** - Fill the result buckets, build the snippet and config hints
//!
//! Conversion never fails: every input, however malformed, produces a result.

pub mod types;
pub mod error;
pub mod utils;
pub mod scales;

pub mod parser;
pub mod resolver;
pub mod aggregator;
pub mod render;
pub mod cli;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

// Re-export commonly used types and functions
pub use error::{ConverterError, Result};
pub use types::*;
pub use parser::{parse, strip_comments};
pub use resolver::{resolve_declaration, PropertyKind, PropertyOutput};
pub use aggregator::Aggregator;
pub use render::{render_classes, render_config_stub, render_json, render_text};
pub use cli::EnhancedCli;

/// Converter version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Canned stylesheet used by `twconv example` and the benchmarks
pub const EXAMPLE_CSS: &str = "/* Paste any CSS */
.btn {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 12px 16px;
  gap: 8px;
  background-color: #4f46e5;
  color: #fff;
  border-radius: 8px;
  font-weight: 600;
  font-size: 14px;
}
";

/// Convert CSS text with the default snippet options
pub fn convert(source: &str) -> ConversionResult {
    convert_with_options(source, &ConversionOptions::default())
}

/// Convert CSS text with custom snippet options
pub fn convert_with_options(source: &str, options: &ConversionOptions) -> ConversionResult {
    log::debug!("Converting {} characters of CSS", source.len());

    let declarations = parser::parse(source);

    let mut config = ConversionConfig::new();
    let mut aggregator = Aggregator::new();
    for declaration in &declarations {
        aggregator.add(resolve_declaration(declaration, &mut config));
    }

    let result = aggregator.finish(&config, options);
    log::debug!(
        "Conversion produced {} utilities, {} arbitrary classes, {} config entries",
        result.utilities.len(),
        result.arbitrary.len(),
        result.config.len()
    );
    result
}

/// Read a stylesheet from disk and convert it
pub fn convert_file(input_path: impl AsRef<Path>, options: &ConversionOptions) -> Result<ConversionResult> {
    let input_path = input_path.as_ref();
    let source = fs::read_to_string(input_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConverterError::FileNotFound {
            path: input_path.display().to_string(),
        },
        _ => ConverterError::Io(e),
    })?;

    log::info!("Converting '{}'", input_path.display());
    Ok(convert_with_options(&source, options))
}
