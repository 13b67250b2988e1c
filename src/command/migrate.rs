use crate::config::Config;
use crate::error::{MigrateError, Result};
use crate::ops::{Changeset, MergeOptions, extract_dependencies, merge_dependencies};
use crate::ops::{render_manifest, stage_migration};
use crate::report;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct MigrateArgs {
    /// Path to the config.yaml file (defaults to ./config.yaml when present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// String to inject as a prefix to the package name in package.json
    #[arg(long, short = 'p', value_name = "PREFIX")]
    pub package_name_prefix: Option<String>,

    /// Path to the bower.json file
    #[arg(long, short = 'i', value_name = "PATH", default_value = "./bower.json")]
    pub bower_file: PathBuf,

    /// Path to the package.json file
    #[arg(long, short = 'o', value_name = "PATH", default_value = "./package.json")]
    pub package_file: PathBuf,

    /// Resolve duplicate dependencies to the version declared in bower.json
    #[arg(long, short = 'd')]
    pub overwrite_duplicates: bool,

    /// Show what would change without writing or deleting anything
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

impl MigrateArgs {
    /// Merge options from the flags, with `overwriteDuplicates` from the
    /// config able to switch overwriting on.
    pub fn merge_options(&self, config: &Config) -> MergeOptions {
        MergeOptions {
            name_prefix: self.package_name_prefix.clone(),
            overwrite_duplicates: self.overwrite_duplicates || config.overwrite_duplicates,
        }
    }
}

pub fn execute(args: MigrateArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let options = args.merge_options(&config);

    log::debug!(
        "Migrating {} into {} (overwrite duplicates: {})",
        args.bower_file.display(),
        args.package_file.display(),
        options.overwrite_duplicates
    );

    // 1. Extract from bower.json
    let bower_text = read_manifest(&args.bower_file)?;
    let extraction = extract_dependencies(&bower_text, &config)?;

    // 2. Merge into package.json
    let package_text = read_manifest(&args.package_file)?;
    let outcome = merge_dependencies(&package_text, extraction, &options)?;
    report::merge_events(&outcome.events);

    // 3. Write package.json, then remove bower.json
    let rendered = render_manifest(&outcome.manifest, package_text.ends_with('\n'))?;
    let mut changes = Changeset::new(args.dry_run);
    stage_migration(&mut changes, &args.package_file, rendered, &args.bower_file);

    if changes.is_dry_run() {
        changes.commit()?;
        changes.print_plan();
    } else {
        report::display_message(
            "clean-up",
            format!("Removing {}", args.bower_file.display()),
        );
        if let Err(e) = changes.commit() {
            changes.report_partial();
            return Err(e);
        }
    }

    // 4. Report git-sourced packages
    report::unpublished_packages(&outcome.unpublished);

    if !args.dry_run {
        println!(
            "{} {} → {}",
            "✓ Migrated".green().bold(),
            args.bower_file.display().to_string().yellow(),
            args.package_file.display().to_string().green().bold()
        );
    }

    Ok(())
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MigrateError::file_io("read", path, e))
}
