//! Binary entry point for `bower-migrate`.

use std::process;

fn main() {
    if let Err(e) = bower_migrate::run() {
        bower_migrate::report::display_error(&e);
        process::exit(1);
    }
}
