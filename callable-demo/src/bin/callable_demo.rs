//! Runs the block, proc and lambda demonstrations against stdout.
//!
//! Run with: cargo run --bin callable_demo
//! Set `RUST_LOG=debug` to see the demonstration boundaries on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match callable_demo::run_all(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = out.flush();
            log::error!("demonstration aborted: {}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
