use crate::command::migrate::MigrateArgs;
use clap::Parser;

/// Move bower.json dependencies into package.json and remove bower.json.
#[derive(Parser, Debug)]
#[command(name = "bower-migrate", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub migrate: MigrateArgs,
}
