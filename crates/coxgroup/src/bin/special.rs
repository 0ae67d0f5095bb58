//! Test driver: like `schlafli`, but the group is picked from the catalog
//! by name (one of the large B and E families that have no linear symbol or
//! are tedious to spell out).

use std::process::ExitCode;

use coxgroup::catalog;
use eyre::{WrapErr, eyre};

fn main() -> eyre::Result<ExitCode> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [name, gens, target] = args.as_slice() else {
        return Err(eyre!("usage: special NAME GENS TARGET"));
    };

    let group = match name.as_str() {
        "E6" => catalog::e(6),
        "E7" => catalog::e(7),
        "E8" => catalog::e(8),
        "B6" => catalog::b(6),
        "B7" => catalog::b(7),
        "B8" => catalog::b(8),
        _ => return Err(eyre!("unknown group {name:?}")),
    };

    let gens: Vec<u8> = gens
        .split_whitespace()
        .map(|tok| tok.parse().wrap_err_with(|| format!("bad integer {tok:?}")))
        .collect::<eyre::Result<_>>()?;
    let target: usize = target.parse().wrap_err("bad target")?;

    let order = group.solve(&gens)?.order();

    println!("Order: {order}:{target}");
    Ok(if order == target {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
