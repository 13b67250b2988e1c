use crate::error::Result;
use crate::ops::changeset::Changeset;
use serde_json::{Map, Value};
use std::path::Path;

/// Serializes the manifest with 2-space indentation.
///
/// `trailing_newline` mirrors whether the file being replaced ended with one.
pub fn render_manifest(manifest: &Map<String, Value>, trailing_newline: bool) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(manifest)?;
    if trailing_newline {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Stages the rewritten target manifest followed by removal of the legacy one.
pub fn stage_migration(
    changes: &mut Changeset,
    package_file: &Path,
    rendered: String,
    bower_file: &Path,
) {
    changes.update_file(package_file.to_path_buf(), rendered);
    changes.remove_file(bower_file.to_path_buf());
}
