//! Example that meshes the boundary of the 600-cell: one tiling pass per
//! rank-3 facet subgroup of H4, merged into a single tetrahedron soup.

use coxgroup::{CoxeterGroup, combinations};

fn main() {
    env_logger::init();

    let group = CoxeterGroup::schlafli(&[5, 3, 3]).unwrap();
    let combos = combinations(group.gens(), 3);

    let parts = coxmesh::hull(&group, combos, &[]).unwrap();
    let data = coxmesh::merge(parts);

    println!("{} tetrahedra", data.len());
}
