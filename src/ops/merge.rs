//! Folds extracted bower dependencies into `package.json`.

use crate::error::Result;
use crate::ops::extract::Extraction;
use crate::ops::manifest::{
    LEGACY_TOOL, UnpublishedPackages, parse_manifest, rewrite_git_sources, section_mut,
};
use serde_json::{Map, Value};

pub const TARGET_MANIFEST: &str = "package.json";

#[derive(Debug, Default, Clone)]
pub struct MergeOptions {
    /// Prefix prepended to the package name unless it is already there.
    pub name_prefix: Option<String>,
    /// Bower wins over `package.json` for dependencies declared in both.
    pub overwrite_duplicates: bool,
}

/// What happened to one extracted dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    Moved(String),
    Skipped(String),
}

impl MergeEvent {
    pub fn name(&self) -> &str {
        match self {
            MergeEvent::Moved(name) | MergeEvent::Skipped(name) => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The updated `package.json` document, not yet serialized.
    pub manifest: Map<String, Value>,
    pub events: Vec<MergeEvent>,
    /// Legacy git packages followed by git-sourced `devDependencies`.
    pub unpublished: UnpublishedPackages,
}

/// Merges `extraction` into the target manifest text.
pub fn merge_dependencies(
    text: &str,
    extraction: Extraction,
    options: &MergeOptions,
) -> Result<MergeOutcome> {
    let mut doc = parse_manifest(text, TARGET_MANIFEST)?;
    let Extraction {
        dependencies: incoming,
        mut unpublished,
    } = extraction;

    let mut events = Vec::with_capacity(incoming.len());
    match section_mut(&mut doc, "dependencies", TARGET_MANIFEST)? {
        Some(existing) => {
            for (name, value) in incoming {
                if !existing.contains_key(&name) || options.overwrite_duplicates {
                    existing.insert(name.clone(), value);
                    events.push(MergeEvent::Moved(name));
                } else {
                    log::debug!("Keeping existing {} = {}", name, existing[&name]);
                    events.push(MergeEvent::Skipped(name));
                }
            }
        }
        None => {
            events.extend(incoming.keys().cloned().map(MergeEvent::Moved));
            doc.insert("dependencies".to_string(), Value::Object(incoming));
        }
    }

    if let Some(prefix) = options.name_prefix.as_deref() {
        apply_name_prefix(&mut doc, prefix);
    }

    if let Some(dev) = section_mut(&mut doc, "devDependencies", TARGET_MANIFEST)? {
        rewrite_git_sources(dev, &mut unpublished);
        if dev.shift_remove(LEGACY_TOOL).is_some() {
            log::debug!("Removed {} from devDependencies", LEGACY_TOOL);
        }
    }

    Ok(MergeOutcome {
        manifest: doc,
        events,
        unpublished,
    })
}

fn apply_name_prefix(doc: &mut Map<String, Value>, prefix: &str) {
    if prefix.is_empty() {
        return;
    }

    match doc.get_mut("name") {
        Some(Value::String(name)) => {
            if !name.starts_with(prefix) {
                let prefixed = format!("{}{}", prefix, name);
                log::debug!("Prefixed package name: {} → {}", name, prefixed);
                *name = prefixed;
            }
        }
        _ => log::warn!(
            "{} has no string `name`; skipping prefix '{}'",
            TARGET_MANIFEST,
            prefix
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::MigrateError;
    use crate::ops::extract::extract_dependencies;
    use serde_json::json;

    fn extract(bower: &str) -> Extraction {
        extract_dependencies(bower, &Config::default()).unwrap()
    }

    fn keep_duplicates() -> MergeOptions {
        MergeOptions::default()
    }

    #[test]
    fn test_simple_move() {
        let outcome = merge_dependencies(
            r#"{"name": "app", "dependencies": {}}"#,
            extract(r#"{"dependencies": {"left-pad": "^1.0.0"}}"#),
            &keep_duplicates(),
        )
        .unwrap();

        assert_eq!(
            Value::Object(outcome.manifest),
            json!({ "name": "app", "dependencies": { "left-pad": "^1.0.0" } })
        );
        assert_eq!(outcome.events, vec![MergeEvent::Moved("left-pad".into())]);
        assert!(outcome.unpublished.is_empty());
    }

    #[test]
    fn test_missing_dependencies_taken_wholesale() {
        let outcome = merge_dependencies(
            r#"{"name": "app", "version": "1.0.0"}"#,
            extract(r#"{"dependencies": {"a": "1", "b": "2"}}"#),
            &keep_duplicates(),
        )
        .unwrap();

        let keys: Vec<_> = outcome.manifest.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "version", "dependencies"]);
        assert_eq!(outcome.manifest["dependencies"], json!({ "a": "1", "b": "2" }));
        assert_eq!(
            outcome.events,
            vec![MergeEvent::Moved("a".into()), MergeEvent::Moved("b".into())]
        );
    }

    #[test]
    fn test_duplicate_skipped_without_overwrite() {
        let outcome = merge_dependencies(
            r#"{"name": "app", "dependencies": {"left-pad": "^1.1.0"}}"#,
            extract(r#"{"dependencies": {"left-pad": "^1.0.0"}}"#),
            &keep_duplicates(),
        )
        .unwrap();

        assert_eq!(outcome.manifest["dependencies"]["left-pad"], "^1.1.0");
        assert_eq!(outcome.events, vec![MergeEvent::Skipped("left-pad".into())]);
    }

    #[test]
    fn test_duplicate_overwritten_in_place() {
        let options = MergeOptions {
            overwrite_duplicates: true,
            ..Default::default()
        };
        let outcome = merge_dependencies(
            r#"{"dependencies": {"left-pad": "^1.1.0", "react": "^16.0.0"}}"#,
            extract(r#"{"dependencies": {"left-pad": "^1.0.0"}}"#),
            &options,
        )
        .unwrap();

        assert_eq!(
            outcome.manifest["dependencies"],
            json!({ "left-pad": "^1.0.0", "react": "^16.0.0" })
        );
        assert_eq!(outcome.events, vec![MergeEvent::Moved("left-pad".into())]);
    }

    #[test]
    fn test_renamed_dependency_respects_target_duplicate() {
        let config = Config {
            package_resolves: json!({ "jquery-legacy": "jquery" })
                .as_object()
                .cloned()
                .unwrap(),
            overwrite_duplicates: false,
        };
        let extraction =
            extract_dependencies(r#"{"dependencies": {"jquery-legacy": "1.8.0"}}"#, &config)
                .unwrap();

        let outcome = merge_dependencies(
            r#"{"dependencies": {"jquery": "^3.0.0"}}"#,
            extraction,
            &keep_duplicates(),
        )
        .unwrap();

        let deps = outcome.manifest["dependencies"].as_object().unwrap();
        assert!(!deps.contains_key("jquery-legacy"));
        assert_eq!(deps["jquery"], "^3.0.0");
        assert_eq!(outcome.events, vec![MergeEvent::Skipped("jquery".into())]);
    }

    #[test]
    fn test_name_prefix_is_idempotent() {
        let options = MergeOptions {
            name_prefix: Some("@acme/".to_string()),
            ..Default::default()
        };

        let first = merge_dependencies(r#"{"name": "app"}"#, Extraction::default(), &options)
            .unwrap();
        assert_eq!(first.manifest["name"], "@acme/app");

        let text = serde_json::to_string(&first.manifest).unwrap();
        let second = merge_dependencies(&text, Extraction::default(), &options).unwrap();
        assert_eq!(second.manifest["name"], "@acme/app");
    }

    #[test]
    fn test_name_prefix_without_name_is_skipped() {
        let options = MergeOptions {
            name_prefix: Some("@acme/".to_string()),
            ..Default::default()
        };
        let outcome =
            merge_dependencies(r#"{"private": true}"#, Extraction::default(), &options).unwrap();
        assert!(!outcome.manifest.contains_key("name"));
    }

    #[test]
    fn test_dev_dependencies_cleanup() {
        let outcome = merge_dependencies(
            r#"{"devDependencies": {
                "bower": "^1.8.0",
                "fixtures": "git@github.com:acme/fixtures.git",
                "jest": "^24.0.0"
            }}"#,
            extract(r#"{"dependencies": {"widget": "git://github.com/acme/widget.git"}}"#),
            &keep_duplicates(),
        )
        .unwrap();

        assert_eq!(
            outcome.manifest["devDependencies"],
            json!({
                "fixtures": "git+ssh://git@github.com:acme/fixtures.git",
                "jest": "^24.0.0"
            })
        );
        assert_eq!(
            outcome.unpublished.names().collect::<Vec<_>>(),
            vec!["widget", "fixtures"]
        );
    }

    #[test]
    fn test_git_package_in_both_manifests_reported_once() {
        let outcome = merge_dependencies(
            r#"{"devDependencies": {"shared": "git://example.com/shared.git#dev"}}"#,
            extract(r#"{"dependencies": {"shared": "git://example.com/shared.git"}}"#),
            &keep_duplicates(),
        )
        .unwrap();

        assert_eq!(outcome.unpublished.len(), 1);
        assert_eq!(
            outcome.unpublished.get("shared"),
            Some("git://example.com/shared.git#dev")
        );
    }

    #[test]
    fn test_invalid_target_is_parse_error() {
        let err = merge_dependencies("not json", Extraction::default(), &keep_duplicates())
            .unwrap_err();
        assert!(matches!(
            err,
            MigrateError::Parse {
                manifest: "package.json",
                ..
            }
        ));
    }

    #[test]
    fn test_dev_dependencies_must_be_object() {
        let err = merge_dependencies(
            r#"{"devDependencies": ["bower"]}"#,
            Extraction::default(),
            &keep_duplicates(),
        )
        .unwrap_err();
        assert!(matches!(err, MigrateError::InvalidManifest { .. }));
    }
}
