//! Input gathering and reporting around [`sum_program::sum`].

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;

pub use sum_program::sum;

#[derive(Serialize)]
pub struct Stats {
    pub program: &'static str,
    pub n: u64,
    pub sum: i128,
    pub compute_secs: f32,
}

/// Reads `var` from the environment, falling back to `def` when it is unset.
pub fn env_or<T: FromStr>(var: &str, def: T) -> Result<T>
where
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(s) => s
            .trim()
            .parse::<T>()
            .with_context(|| format!("Could not parse {var}={s:?}")),
        Err(_) => Ok(def),
    }
}

/// The sequence `0..max_num`.
pub fn range(max_num: u64) -> Result<Vec<i64>> {
    let end = i64::try_from(max_num)
        .with_context(|| format!("range bound {max_num} does not fit in i64"))?;
    Ok((0..end).collect())
}

/// Parses whitespace-separated integers.
pub fn parse_nums(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .with_context(|| format!("invalid integer `{tok}`"))
        })
        .collect()
}

/// Reads all of `reader` and parses it with [`parse_nums`].
pub fn read_nums<R: Read>(mut reader: R) -> Result<Vec<i64>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read input")?;
    parse_nums(&text)
}

/// Writes the `Sum is: <value>` line.
pub fn report<W: Write>(sum: i128, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Sum is: {sum}")
}

/// Sums `nums` and reports the total to `out`.
pub fn do_work<W: Write>(nums: &[i64], out: &mut W) -> std::io::Result<i128> {
    let total = sum(nums);
    report(total, out)?;
    Ok(total)
}
