//! Variant build-type rewriting
//!
//! A variant file carries a `BUILD_TYPES := <value>` line that the external
//! build tool reads to pick its compilation profile. [`ensure_build_type`]
//! keeps that line in sync with the configuration of the group about to run.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::FilesystemError;

/// Idempotently set the build type recorded in a variant file.
///
/// Only the first `BUILD_TYPES :=` line is considered. If its value already
/// equals `build_type` nothing is written; if it differs, that single line is
/// rewritten in place (keeping its line ending); if no such line exists one
/// is appended. Returns whether the file was written.
///
/// The write goes through a temporary sibling file plus rename so the variant
/// file is never left half-written.
pub fn ensure_build_type(path: &Path, build_type: &str) -> Result<bool, FilesystemError> {
    let pattern = Regex::new(r"^BUILD_TYPES := (.*)$").unwrap();

    let content = fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    let mut lines: Vec<String> = content.split_inclusive('\n').map(String::from).collect();

    let mut updated = None;
    for line in &mut lines {
        let (body, terminator) = split_line_ending(line);
        if let Some(caps) = pattern.captures(body) {
            if caps.get(1).map(|m| m.as_str()) == Some(build_type) {
                updated = Some(false);
            } else {
                *line = format!("BUILD_TYPES := {build_type}{terminator}");
                updated = Some(true);
            }
            break;
        }
    }

    let updated = match updated {
        Some(updated) => updated,
        None => {
            // No BUILD_TYPES line anywhere: append one, completing the last
            // line first if it lacks a newline.
            if let Some(last) = lines.last_mut() {
                if !last.ends_with('\n') {
                    last.push('\n');
                }
            }
            lines.push(format!("BUILD_TYPES := {build_type}\n"));
            true
        }
    };

    if updated {
        write_replace(path, &lines.concat())?;
    }

    Ok(updated)
}

/// Split a line into its body and trailing line ending.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Write `contents` next to `path` and rename over it.
fn write_replace(path: &Path, contents: &str) -> Result<(), FilesystemError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "variant".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, contents).map_err(|e| FilesystemError::WriteFile {
        path: tmp.clone(),
        error: e.to_string(),
    })?;
    fs::rename(&tmp, path).map_err(|e| FilesystemError::ReplaceFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
