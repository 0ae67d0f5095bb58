//! The standard catalog of named Coxeter groups.
//!
//! Each function builds the Coxeter matrix of a classical family from its
//! Schläfli symbol (plus the extra off-diagram edge for the branched `D` and
//! `E` diagrams). Ranks outside a family's range are caller bugs and panic.

use crate::CoxeterGroup;

fn expect_symbol(symbol: &[u32], name: String) -> CoxeterGroup {
    CoxeterGroup::schlafli_named(symbol, name).expect("catalog symbol is valid")
}

/// Simplex symmetry, `[3, 3, …, 3]`. Order `(n+1)!`.
pub fn a(n: usize) -> CoxeterGroup {
    let name = format!("A({n})");
    if n == 0 {
        return CoxeterGroup::from_matrix(vec![], name).expect("empty matrix is valid");
    }
    expect_symbol(&vec![3; n - 1], name)
}

/// Cube and orthoplex symmetry, `[4, 3, …, 3]`. Order `2^n n!`.
pub fn b(n: usize) -> CoxeterGroup {
    assert!(n >= 2, "B(n) requires n >= 2");
    let mut symbol = vec![3; n - 1];
    symbol[0] = 4;
    expect_symbol(&symbol, format!("B({n})"))
}

/// Demicube symmetry: a `[3, …, 3, 2]` chain with generator `n-1` braided
/// to generator 1. Order `2^(n-1) n!`.
pub fn d(n: usize) -> CoxeterGroup {
    assert!(n >= 3, "D(n) requires n >= 3");
    let mut symbol = vec![3; n - 1];
    symbol[n - 2] = 2;
    let mut g = expect_symbol(&symbol, format!("D({n})"));
    g.set(1, (n - 1) as u8, 3);
    g
}

/// Gosset polytope symmetry: a `[3, …, 3, 2]` chain with generator `n-1`
/// braided to generator 2.
pub fn e(n: usize) -> CoxeterGroup {
    assert!(n >= 4, "E(n) requires n >= 4");
    let mut symbol = vec![3; n - 1];
    symbol[n - 2] = 2;
    let mut g = expect_symbol(&symbol, format!("E({n})"));
    g.set(2, (n - 1) as u8, 3);
    g
}

/// 24-cell symmetry, `[3, 4, 3]`. Order 1152.
pub fn f4() -> CoxeterGroup {
    expect_symbol(&[3, 4, 3], "F4".to_string())
}

/// Hexagon symmetry, `[6]`. Order 12.
pub fn g2() -> CoxeterGroup {
    expect_symbol(&[6], "G2".to_string())
}

/// Pentagonal symmetry, `[5, 3, …, 3]`: the icosahedron at rank 3 and the
/// 600-cell at rank 4.
pub fn h(n: usize) -> CoxeterGroup {
    assert!(n >= 2, "H(n) requires n >= 2");
    let mut symbol = vec![3; n - 1];
    symbol[0] = 5;
    expect_symbol(&symbol, format!("H({n})"))
}

/// Polygonal symmetry, `[n]`. Order `2n`.
pub fn i2(n: u32) -> CoxeterGroup {
    expect_symbol(&[n], format!("I2({n})"))
}

/// Toroidal symmetry `[n, 2, m]`, the product of two polygonal groups.
/// Order `4nm`.
pub fn t(n: u32, m: u32) -> CoxeterGroup {
    let name = if n == m {
        format!("T({n})")
    } else {
        format!("T({n},{m})")
    };
    expect_symbol(&[n, 2, m], name)
}

/// Universal group on `n` generators: no braiding at all. Order `2^n`.
pub fn u(n: usize) -> CoxeterGroup {
    CoxeterGroup::new_named(n, format!("U({n})"))
}
