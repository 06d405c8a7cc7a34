//! Variant list expansion
//!
//! The master variant file names every build variant on `VARIANTS :=` lines;
//! each name maps to a variant file reference by appending the configured
//! extension.

use crate::config::Settings;

/// Expand the master variant list into variant file references.
///
/// Every line starting with the variants marker contributes its
/// whitespace-separated tokens after the marker, in order. Multiple matching
/// lines accumulate; duplicates are kept.
pub fn resolve_variants<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    settings: &Settings,
) -> Vec<String> {
    let mut variants = Vec::new();

    for line in lines {
        if line.starts_with(&settings.variants_marker) {
            // Skip the two marker tokens ("VARIANTS" and ":=").
            variants.extend(
                line.split_whitespace()
                    .skip(2)
                    .map(|name| format!("{name}.{}", settings.variant_extension)),
            );
        }
    }

    variants
}
