//! asana-deps - Asana task dependency graphs

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = asana_deps::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
