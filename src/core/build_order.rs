//! Build-order script parsing and operation grouping
//!
//! Translates the line-oriented build-order script into an ordered table of
//! operation groups. Each group holds one configuration, one operation, and
//! the set of project directories built under them.
//!
//! The script grammar is small:
//!
//! ```text
//! config release
//! operation clean
//! 1 apps/frontend
//! 1 apps/backend
//! 2 libs/common
//! ```
//!
//! `config` and `operation` directives update the running state; a line whose
//! first character is a digit adds its path to the group named by that digit.
//! Everything else is ignored. A configuration or operation change inside an
//! already-populated group id is a conflict: the entry opens a fresh group one
//! id later and all subsequent entries shift by the same amount.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::Settings;

/// A batch of project directories sharing one configuration and operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationGroup {
    /// Build configuration applied before the group runs
    pub configuration: String,
    /// Build target passed to the tool (empty means the default target)
    pub operation: String,
    /// Project directories, workspace-relative, unique
    pub directories: BTreeSet<String>,
}

impl OperationGroup {
    fn new(configuration: &str, operation: &str) -> Self {
        Self {
            configuration: configuration.to_string(),
            operation: operation.to_string(),
            directories: BTreeSet::new(),
        }
    }
}

/// Kind of conflict that forced a group split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// Configuration changed inside an existing group
    ConfigurationChange,
    /// Operation changed inside an existing group
    OperationChange,
}

impl ConflictKind {
    /// Human-readable conflict description
    pub fn describe(self) -> &'static str {
        match self {
            Self::ConfigurationChange => "configuration change",
            Self::OperationChange => "operation change",
        }
    }
}

/// Diagnostic recorded when an entry could not join its requested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// What changed inside the group
    pub kind: ConflictKind,
    /// Group id the entry asked for
    pub requested_id: u32,
    /// Group id the entry actually opened
    pub effective_id: u32,
}

/// Parsed build order: operation groups keyed by ascending id, plus any
/// conflict diagnostics. Immutable once parsing completes; reused for every
/// variant.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildOrder {
    /// Operation groups keyed by group id (not necessarily contiguous)
    pub groups: BTreeMap<u32, OperationGroup>,
    /// Conflicts resolved by group splitting
    pub warnings: Vec<ParseWarning>,
}

impl BuildOrder {
    /// Number of operation groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the script produced no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Running state threaded through the line scan.
#[derive(Debug)]
struct ScanState {
    configuration: String,
    operation: String,
    group_offset: u32,
}

impl ScanState {
    fn new(settings: &Settings) -> Self {
        Self {
            configuration: settings.default_configuration.clone(),
            operation: settings.default_operation.clone(),
            group_offset: 0,
        }
    }
}

/// Parse a build-order script into its operation groups.
///
/// Lines are classified in priority order: `config` directive, `operation`
/// directive, digit entry, ignored. Blank lines are skipped. Directive values
/// start one byte past the keyword; a bare directive yields the empty string.
pub fn parse_build_order<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    settings: &Settings,
) -> BuildOrder {
    let mut order = BuildOrder::default();
    let mut state = ScanState::new(settings);

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(&settings.config_directive) {
            state.configuration = directive_value(line, &settings.config_directive);
        } else if line.starts_with(&settings.operation_directive) {
            state.operation = directive_value(line, &settings.operation_directive);
        } else if let Some(digit) = line.chars().next().and_then(|c| c.to_digit(10)) {
            // Entry format is "<digit> <path>": the path starts two bytes in.
            let path = line.get(2..).unwrap_or("").to_string();
            record_entry(&mut order, &mut state, digit, path);
        }
        // Anything else is ignored.
    }

    order
}

/// Value of a directive line: everything one byte past the keyword.
fn directive_value(line: &str, keyword: &str) -> String {
    line.get(keyword.len() + 1..).unwrap_or("").to_string()
}

/// Fold one entry into the table, splitting the group on conflict.
///
/// The requested id is the entry's digit plus the accumulated offset. A
/// configuration or operation mismatch against the stored group bumps the
/// effective id by one, shifts all later entries by the same amount, and
/// opens a brand-new group with an empty directory set (replacing whatever
/// already sat at the bumped id).
fn record_entry(order: &mut BuildOrder, state: &mut ScanState, digit: u32, path: String) {
    let requested = digit + state.group_offset;

    let (effective, mut group) = match order.groups.get(&requested) {
        Some(existing) if existing.configuration != state.configuration => {
            tracing::warn!(
                "Cannot change configuration in operation group {requested}. \
                 Creating operation group {}.",
                requested + 1
            );
            order.warnings.push(ParseWarning {
                kind: ConflictKind::ConfigurationChange,
                requested_id: requested,
                effective_id: requested + 1,
            });
            state.group_offset += 1;
            (
                requested + 1,
                OperationGroup::new(&state.configuration, &state.operation),
            )
        }
        Some(existing) if existing.operation != state.operation => {
            tracing::warn!(
                "Cannot change make operation in operation group {requested}. \
                 Creating operation group {}.",
                requested + 1
            );
            order.warnings.push(ParseWarning {
                kind: ConflictKind::OperationChange,
                requested_id: requested,
                effective_id: requested + 1,
            });
            state.group_offset += 1;
            (
                requested + 1,
                OperationGroup::new(&state.configuration, &state.operation),
            )
        }
        Some(existing) => (requested, existing.clone()),
        None => (
            requested,
            OperationGroup::new(&state.configuration, &state.operation),
        ),
    };

    group.directories.insert(path);
    order.groups.insert(effective, group);
}
