//! Shared manifest helpers: parsing, dependency tables, git source rewrites.

use crate::error::{MigrateError, Result};
use serde_json::{Map, Value};

/// Dependency table: package name → version range or source URL.
pub type Dependencies = Map<String, Value>;

/// Name of the legacy package manager, as it appears in `devDependencies`.
pub const LEGACY_TOOL: &str = "bower";

const GIT_PREFIX: &str = "git";
const GIT_SSH_SHORTHAND: &str = "git@";
const GIT_SSH_SCHEME: &str = "git+ssh://";

/// Packages sourced from git instead of a registry, in the order they were found.
///
/// Recording a name twice keeps its first position and takes the newer source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnpublishedPackages {
    entries: Vec<(String, String)>,
}

impl UnpublishedPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &str, source: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = source.to_string(),
            None => self.entries.push((name.to_string(), source.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, source)| source.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses manifest text into its top-level object.
pub fn parse_manifest(text: &str, manifest: &'static str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| MigrateError::Parse { manifest, source })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(MigrateError::InvalidManifest {
            manifest,
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// Borrows a dependency section mutably, if present.
///
/// A section that exists but is not an object is an error.
pub fn section_mut<'a>(
    doc: &'a mut Map<String, Value>,
    key: &str,
    manifest: &'static str,
) -> Result<Option<&'a mut Dependencies>> {
    match doc.get_mut(key) {
        None => Ok(None),
        Some(Value::Object(table)) => Ok(Some(table)),
        Some(other) => Err(MigrateError::InvalidManifest {
            manifest,
            reason: format!("`{}` must be an object, found {}", key, json_kind(other)),
        }),
    }
}

/// Rewrites `git@host:repo` sources to `git+ssh://git@host:repo` and records
/// every git-sourced entry in `unpublished`.
pub fn rewrite_git_sources(deps: &mut Dependencies, unpublished: &mut UnpublishedPackages) {
    for (name, value) in deps.iter_mut() {
        let Value::String(source) = value else {
            continue;
        };

        if source.starts_with(GIT_SSH_SHORTHAND) {
            let rewritten = format!("{}{}", GIT_SSH_SCHEME, source);
            log::debug!("Rewrote git source for {}: {} → {}", name, source, rewritten);
            *source = rewritten;
        }

        if source.starts_with(GIT_PREFIX) {
            unpublished.record(name, source);
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
