use std::process::ExitCode;

use creator_deals::cli::{self, output};

fn main() -> ExitCode {
    creator_deals::init();
    match cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_reported() {
                output::error(&err);
            }
            ExitCode::FAILURE
        }
    }
}
