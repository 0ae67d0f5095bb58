//! Coxeter matrices and Todd-Coxeter coset enumeration.
//!
//! A Coxeter group is presented by involutive generators `g_0 .. g_{r-1}`
//! and relations `(g_i g_j)^m = e`, where `m` is the entry `M[i][j]` of a
//! symmetric matrix with unit diagonal. This crate builds such matrices
//! (from simplified Schläfli symbols or from the standard catalog of named
//! groups), restricts them to subgroups, and enumerates the right cosets of
//! a subgroup via the Todd-Coxeter procedure.
//!
//! The result of a solve is a dense [`Cosets`] table mapping each
//! `(coset, generator)` pair to a coset, from which a spanning [`Path`] over
//! the coset graph can be derived and replayed.
//!
//! ```
//! let cube = coxgroup::catalog::b(3);
//! let cosets = cube.solve(&[]).unwrap();
//! assert_eq!(cosets.order(), 48);
//!
//! let vertices = cube.solve(&[1, 2]).unwrap();
//! assert_eq!(vertices.order(), 8);
//! ```

pub mod catalog;
mod cosets;
mod coxeter;
mod error;
mod path;
mod solver;

pub use cosets::{Coset, Cosets};
pub use coxeter::{CoxeterGroup, GenSet, MAX_RANK, Relation, combinations, recontext_gens};
pub use error::{GroupError, GroupResult};
pub use path::Path;
