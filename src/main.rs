use anyhow::Result;
use wakabox::{cli::run_cli, utils::runtime::single_thread_runtime};

/// A failed run is printed once, by the `Err` returned from here, and exits non-zero.
fn main() -> Result<()> {
    single_thread_runtime()?.block_on(run_cli())
}
