//! Runtime settings
//!
//! Bundles the workspace file conventions and script markers into one value
//! passed explicitly into the parser, resolver, and sequencer.

use super::defaults;

/// Workspace conventions and script markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Configuration in effect before any `config` directive
    pub default_configuration: String,
    /// Operation in effect before any `operation` directive
    pub default_operation: String,
    /// Extension appended to resolved variant names
    pub variant_extension: String,
    /// Build-order script name, relative to the workspace root
    pub build_order_file: String,
    /// Variant directory name, relative to the workspace root
    pub variant_directory: String,
    /// Master variant-list file inside the variant directory
    pub master_variant_file: String,
    /// Log directory, relative to the workspace root
    pub log_directory: String,
    /// Directive keyword for configuration changes
    pub config_directive: String,
    /// Directive keyword for operation changes
    pub operation_directive: String,
    /// Marker for variant list lines
    pub variants_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_configuration: defaults::DEFAULT_CONFIGURATION.to_string(),
            default_operation: defaults::DEFAULT_OPERATION.to_string(),
            variant_extension: defaults::VARIANT_EXTENSION.to_string(),
            build_order_file: defaults::BUILD_ORDER_FILE.to_string(),
            variant_directory: defaults::VARIANT_DIRECTORY.to_string(),
            master_variant_file: defaults::MASTER_VARIANT_FILE.to_string(),
            log_directory: defaults::LOG_DIRECTORY.to_string(),
            config_directive: defaults::CONFIG_DIRECTIVE.to_string(),
            operation_directive: defaults::OPERATION_DIRECTIVE.to_string(),
            variants_marker: defaults::VARIANTS_MARKER.to_string(),
        }
    }
}
