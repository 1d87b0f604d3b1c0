//! Benchmark driver binary
//!
//! Runs the full three-phase harness (correctness, performance, sample
//! output) over every kernel available on this CPU with the default
//! configuration. Exits non-zero only on unrecoverable failure (allocation);
//! verification failures are reported inline and do not change the exit code.

use std::process::ExitCode;

use triadbench::kernels::registry;
use triadbench::{Driver, HarnessConfig};

fn main() -> ExitCode {
    let config = HarnessConfig::default();
    let kernels = registry();

    match Driver::new(&config, &kernels).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
