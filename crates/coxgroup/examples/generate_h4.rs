//! Example that enumerates the full H4 (600-cell) group by Todd-Coxeter.
//! This is also useful as an imprecise benchmark.

fn main() {
    env_logger::init();

    let group = coxgroup::catalog::h(4);

    let before = std::time::Instant::now();
    let cosets = group.solve(&[]).unwrap();
    println!("{group} in {:?}", before.elapsed());

    assert_eq!(cosets.order(), 14400);
}
