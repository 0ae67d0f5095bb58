use coxgroup::{Coset, Cosets};
use smallvec::SmallVec;

/// An oriented simplex: an ordered tuple of coset indices. Swapping the
/// first two vertices reverses the orientation.
pub type Simplex = SmallVec<[Coset; 8]>;

/// An ordered collection of simplices of equal dimension.
pub type Mesh = Vec<Simplex>;

/// Reverses the orientation of a simplex.
pub fn flip(prim: &mut Simplex) {
    if prim.len() > 1 {
        prim.swap(0, 1);
    }
}

/// Reverses the orientation of every simplex in a mesh.
pub fn flip_mesh(mesh: &mut Mesh) {
    for prim in mesh {
        flip(prim);
    }
}

/// Cones every simplex to `root`, raising the mesh one dimension. The apex
/// becomes the leading vertex of each simplex.
pub fn fan(mesh: Mesh, root: Coset) -> Mesh {
    mesh.into_iter()
        .map(|prim| {
            let mut res = Simplex::with_capacity(prim.len() + 1);
            res.push(root);
            res.extend(prim);
            res
        })
        .collect()
}

/// Translates a mesh by one generator: every vertex moves through the coset
/// table, and every simplex is flipped because a reflection reverses
/// orientation.
pub fn apply(table: &Cosets, r#gen: u8, mesh: &mut Mesh) {
    for prim in mesh.iter_mut() {
        for vertex in prim.iter_mut() {
            *vertex = table.get(*vertex, r#gen);
        }
        flip(prim);
    }
}

/// Concatenates meshes of the same dimension.
pub fn merge(meshes: impl IntoIterator<Item = Mesh>) -> Mesh {
    meshes.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use coxgroup::catalog;

    use super::*;

    fn simplex(vertices: &[u32]) -> Simplex {
        vertices.iter().map(|&v| Coset(v)).collect()
    }

    #[test]
    fn test_flip_swaps_leading_pair() {
        let mut prim = simplex(&[3, 1, 2]);
        flip(&mut prim);
        assert_eq!(prim, simplex(&[1, 3, 2]));

        let mut point = simplex(&[5]);
        flip(&mut point);
        assert_eq!(point, simplex(&[5]));
    }

    #[test]
    fn test_fan_prepends_apex() {
        let mesh = vec![simplex(&[1, 2]), simplex(&[2, 3])];
        let fanned = fan(mesh, Coset::BASE);
        assert_eq!(fanned, vec![simplex(&[0, 1, 2]), simplex(&[0, 2, 3])]);
    }

    #[test]
    fn test_apply_translates_and_flips() {
        let table = catalog::i2(4).solve(&[]).unwrap();
        let mut mesh = vec![simplex(&[0, 1])];
        let moved = simplex(&[table.get(Coset(1), 0).0, table.get(Coset(0), 0).0]);
        apply(&table, 0, &mut mesh);
        assert_eq!(mesh, vec![moved]);
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let merged = merge(vec![
            vec![simplex(&[0])],
            vec![],
            vec![simplex(&[1]), simplex(&[2])],
        ]);
        assert_eq!(merged, vec![simplex(&[0]), simplex(&[1]), simplex(&[2])]);
    }
}
