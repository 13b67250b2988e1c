//! Pulls dependencies out of `bower.json`.

use crate::config::Config;
use crate::error::Result;
use crate::ops::manifest::{
    Dependencies, UnpublishedPackages, parse_manifest, rewrite_git_sources, section_mut,
};

pub const LEGACY_MANIFEST: &str = "bower.json";

/// Dependencies extracted from the legacy manifest.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub dependencies: Dependencies,
    pub unpublished: UnpublishedPackages,
}

/// Parses the legacy manifest, applies the rename table and rewrites git sources.
///
/// A manifest without `dependencies` yields an empty extraction.
pub fn extract_dependencies(text: &str, config: &Config) -> Result<Extraction> {
    let mut doc = parse_manifest(text, LEGACY_MANIFEST)?;

    let Some(deps) = section_mut(&mut doc, "dependencies", LEGACY_MANIFEST)? else {
        log::debug!("{} has no dependencies", LEGACY_MANIFEST);
        return Ok(Extraction::default());
    };
    let mut dependencies = std::mem::take(deps);

    // One pass in table order, no fixpoint.
    for (from, to) in config.renames() {
        if from == to {
            continue;
        }
        if let Some(value) = dependencies.shift_remove(from) {
            log::debug!("Resolved {} → {}", from, to);
            dependencies.insert(to.to_string(), value);
        }
    }

    let mut unpublished = UnpublishedPackages::new();
    rewrite_git_sources(&mut dependencies, &mut unpublished);

    Ok(Extraction {
        dependencies,
        unpublished,
    })
}
