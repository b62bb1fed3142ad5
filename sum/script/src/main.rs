use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::time::Instant;
use sum_script::{env_or, range, read_nums, report, sum, Stats};

/// Sum a list of integers and print `Sum is: <value>`.
#[derive(Debug, Parser)]
#[command(name = "sum-script", version)]
struct Cli {
    /// Integers to sum
    #[arg(allow_negative_numbers = true)]
    nums: Vec<i64>,

    /// Read whitespace-separated integers from stdin
    #[arg(long, conflicts_with = "nums")]
    stdin: bool,

    /// Sum the sequence 0..N (defaults to $SUM_ARG)
    #[arg(long, value_name = "N", conflicts_with_all = ["nums", "stdin"])]
    range: Option<u64>,

    /// Print a JSON stats line after the report
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // input
    let nums = if !cli.nums.is_empty() {
        cli.nums
    } else if cli.stdin {
        read_nums(std::io::stdin().lock())?
    } else {
        let max_num = match cli.range {
            Some(n) => n,
            None => env_or("SUM_ARG", 0u64)?,
        };
        range(max_num)?
    };
    tracing::debug!(n = nums.len(), "summing input");

    // compute
    let it = Instant::now();
    let total = sum(&nums);
    let compute_secs = it.elapsed().as_secs_f32();
    tracing::info!(%total, compute_secs, "done");

    // report
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(total, &mut out)?;

    // stats
    if cli.stats {
        let stats = Stats {
            program: "sum-script",
            n: nums.len() as u64,
            sum: total,
            compute_secs,
        };
        writeln!(out, "{}", serde_json::to_string(&stats)?)?;
    }

    Ok(())
}
