use std::collections::TryReserveError;
use std::mem;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use qsort_bench::progress::DotProgress;
use qsort_bench::{cycles, data, qsort, verify};

/// The reference data generator seeds with 0, so keep runs comparable.
const SEED: u64 = 0;

#[derive(Parser)]
#[command(name = "qsort", about = "Hybrid quicksort micro-benchmark")]
struct Cli {
    /// Size of the array to sort, in bytes
    size: usize,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("cannot allocate {bytes} bytes: {source}")]
    Alloc {
        bytes: usize,
        source: TryReserveError,
    },
    #[error("sort failed: array is out of order")]
    Unsorted,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let start = cycles::read();

    let n = cli.size / mem::size_of::<i32>();
    let mut arr = data::random_array(n, SEED).map_err(|source| RunError::Alloc {
        bytes: cli.size,
        source,
    })?;

    println!("Gonna sort me sum datas!");
    qsort::sort_with(&mut arr, &mut DotProgress::new());

    let end = cycles::read();
    println!("Took {} Cycles", end - start);

    if !verify::is_sorted(&arr) {
        return Err(RunError::Unsorted);
    }
    println!("Prolly sorted 'em by now");
    Ok(())
}
