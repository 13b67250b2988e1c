use crate::error::{MigrateError, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Operation {
    UpdateFile { path: PathBuf, contents: String },
    RemoveFile { path: PathBuf },
}

impl Operation {
    pub fn path(&self) -> &Path {
        match self {
            Operation::UpdateFile { path, .. } | Operation::RemoveFile { path } => path,
        }
    }

    fn describe(&self) -> String {
        match self {
            Operation::UpdateFile { path, .. } => format!("write {}", path.display()),
            Operation::RemoveFile { path } => format!("remove {}", path.display()),
        }
    }
}

/// File operations staged by the migration and applied in order.
///
/// There is no rollback: when an operation fails, the ones before it stay
/// applied and the ones after it never run.
#[must_use = "Changeset must be committed"]
pub struct Changeset {
    operations: Vec<Operation>,
    dry_run: bool,
    applied: usize,
    committed: bool,
}

impl Changeset {
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
            applied: 0,
            committed: false,
        }
    }

    pub fn update_file(&mut self, path: PathBuf, contents: String) {
        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }
        self.operations.push(Operation::UpdateFile { path, contents });
    }

    pub fn remove_file(&mut self, path: PathBuf) {
        if self.dry_run {
            log::info!("Would remove: {}", path.display());
        } else {
            log::debug!("Staging removal of: {}", path.display());
        }
        self.operations.push(Operation::RemoveFile { path });
    }

    /// Applies every staged operation in staging order, stopping at the first failure.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(MigrateError::Other(anyhow::anyhow!(
                "Changeset already committed"
            )));
        }

        if self.dry_run {
            self.committed = true;
            return Ok(());
        }

        for op in &self.operations {
            match op {
                Operation::UpdateFile { path, contents } => {
                    fs::write(path, contents)
                        .map_err(|e| MigrateError::file_io("write", path, e))?;
                    log::debug!("Updated: {}", path.display());
                }
                Operation::RemoveFile { path } => {
                    fs::remove_file(path).map_err(|e| MigrateError::file_io("remove", path, e))?;
                    log::debug!("Removed: {}", path.display());
                }
            }
            self.applied += 1;
        }

        self.committed = true;
        Ok(())
    }

    /// Operations that reached disk, in the order they ran.
    pub fn applied(&self) -> &[Operation] {
        &self.operations[..self.applied]
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Describes the operations that completed before a failed commit.
    pub fn report_partial(&self) {
        if self.applied == 0 {
            return;
        }
        log::warn!(
            "{} of {} operations were applied before the failure and were not undone:",
            self.applied,
            self.operations.len()
        );
        for op in self.applied() {
            eprintln!("   {} {}", "✓".yellow(), op.describe());
        }
    }

    /// Prints the planned operations and, for updates, the new file contents.
    pub fn print_plan(&self) {
        println!("{}", "DRY RUN - No changes will be made".yellow().bold());
        for op in &self.operations {
            match op {
                Operation::UpdateFile { path, contents } => {
                    println!("\n{} {}", "Would write".cyan().bold(), path.display());
                    for line in contents.lines() {
                        println!("   {}", line.dimmed());
                    }
                }
                Operation::RemoveFile { path } => {
                    println!("\n{} {}", "Would remove".cyan().bold(), path.display());
                }
            }
        }
        println!(
            "\n{} {} pending. Run without {} to apply.",
            self.operations.len().to_string().cyan().bold(),
            if self.operations.len() == 1 {
                "operation"
            } else {
                "operations"
            },
            "--dry-run".cyan()
        );
    }
}

impl Drop for Changeset {
    fn drop(&mut self) {
        if !self.committed && self.applied == 0 && !self.operations.is_empty() && !self.dry_run {
            log::warn!("Changeset dropped without commit - changes were not applied");
        }
    }
}
