//! Test driver: enumerate the cosets of a subgroup of a Schläfli-symbol
//! group and compare the count against a target.
//!
//! ```text
//! schlafli "5 3 3" "0" 7200
//! ```
//!
//! Arguments are a space-separated Schläfli symbol, a space-separated list
//! of subgroup generators (possibly empty), and the expected coset count.
//! Exits successfully iff the enumerated count matches.

use std::process::ExitCode;
use std::str::FromStr;

use coxgroup::CoxeterGroup;
use eyre::{WrapErr, eyre};

fn parse_vec<T: FromStr>(arg: &str) -> eyre::Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    arg.split_whitespace()
        .map(|tok| tok.parse().wrap_err_with(|| format!("bad integer {tok:?}")))
        .collect()
}

fn main() -> eyre::Result<ExitCode> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [symbol, gens, target] = args.as_slice() else {
        return Err(eyre!("usage: schlafli SYMBOL GENS TARGET"));
    };

    let symbol: Vec<u32> = parse_vec(symbol)?;
    let gens: Vec<u8> = parse_vec(gens)?;
    let target: usize = target.parse().wrap_err("bad target")?;

    let group = CoxeterGroup::schlafli(&symbol)?;
    let order = group.solve(&gens)?.order();

    println!("Order: {order}:{target}");
    Ok(if order == target {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
