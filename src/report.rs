//! Console output for the migration.

use crate::ops::{MergeEvent, UnpublishedPackages};
use colored::Colorize;
use std::fmt::Display;

pub fn display_message(category: &str, message: impl Display) {
    println!("{} {} {}", format!("[{}]", category).dimmed(), "➟".green(), message);
}

pub fn display_warning(message: impl Display) {
    eprintln!("{}  {}", "⚠  Warning ➟".yellow(), message);
}

pub fn display_error(message: impl Display) {
    eprintln!("{}  {}", "⚠  Error ➟".red(), message);
}

pub fn merge_events(events: &[MergeEvent]) {
    for event in events {
        match event {
            MergeEvent::Moved(name) => {
                display_message("move-dep", format!("Moving dependency {}", name.cyan()))
            }
            MergeEvent::Skipped(name) => display_message(
                "move-dep",
                format!("Skipping duplicate dependency {}", name.cyan()),
            ),
        }
    }
}

pub fn unpublished_packages(unpublished: &UnpublishedPackages) {
    println!("---");
    for name in unpublished.names() {
        display_warning(format!(
            "The {} dependency is loaded from git. It should perhaps be published to a registry?",
            name.cyan()
        ));
    }
}
