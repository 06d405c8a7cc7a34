//! Default configuration values

/// Default build configuration applied before any `config` directive
pub const DEFAULT_CONFIGURATION: &str = "debug";

/// Default make operation (empty string means the tool's default target)
pub const DEFAULT_OPERATION: &str = "";

/// File extension appended to each resolved variant name
pub const VARIANT_EXTENSION: &str = "mk";

/// Build-order script file name, relative to the workspace root
pub const BUILD_ORDER_FILE: &str = ".build_order.txt";

/// Directory holding variant files, relative to the workspace root
pub const VARIANT_DIRECTORY: &str = "__VariantConfig__";

/// Master variant-list file inside the variant directory
pub const MASTER_VARIANT_FILE: &str = "variant.mk";

/// Per-invocation log directory, relative to the workspace root
pub const LOG_DIRECTORY: &str = "_build_logs";

/// Default external build tool
pub const BUILD_TOOL: &str = "make";

/// Directive introducing a configuration change in the build-order script
pub const CONFIG_DIRECTIVE: &str = "config";

/// Directive introducing an operation change in the build-order script
pub const OPERATION_DIRECTIVE: &str = "operation";

/// Marker introducing a variant list line in the master variant file
pub const VARIANTS_MARKER: &str = "VARIANTS :=";
