mod changeset;
mod extract;
mod finalize;
mod manifest;
mod merge;

pub use changeset::{Changeset, Operation};
pub use extract::{Extraction, LEGACY_MANIFEST, extract_dependencies};
pub use finalize::{render_manifest, stage_migration};
pub use manifest::{Dependencies, LEGACY_TOOL, UnpublishedPackages};
pub use merge::{MergeEvent, MergeOptions, MergeOutcome, TARGET_MANIFEST, merge_dependencies};
