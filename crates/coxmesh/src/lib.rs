//! Simplicial meshes for Coxeter polytopes, built on coset enumeration.
//!
//! A rank-`r` Coxeter group acts on the flags of an `(r-1)`-dimensional
//! polytope. This crate composes coset enumeration with a recursive lifting
//! procedure to produce simplex meshes that fill out such polytopes: a
//! subgroup's mesh is tiled across its cosets, reindexed between coset
//! frames, orientation-corrected, and fanned from the base coset.
//!
//! ```
//! use coxgroup::CoxeterGroup;
//!
//! // Triangulate the pentagon: four triangles per edge orbit, fanned from
//! // the base coset.
//! let pentagon = CoxeterGroup::schlafli(&[5]).unwrap();
//! let mesh = coxmesh::triangulate(&pentagon, &[0, 1]).unwrap();
//! assert_eq!(mesh.len(), 8);
//! ```

mod hull;
mod mesh;

pub use hull::{each_tile, get_parity, hull, recontext, tile, triangulate};
pub use mesh::{Mesh, Simplex, apply, fan, flip, flip_mesh, merge};
