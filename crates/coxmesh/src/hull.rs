//! Recursive mesh construction over subgroup cosets.
//!
//! `triangulate` builds the mesh of the polytope region swept out by a
//! generator subset: it triangulates each facet subgroup, tiles that base
//! mesh across the facet's cosets, discards the copy sitting on the base
//! coset, and fans what remains from the base coset. `hull` runs one tiling
//! pass per facet subgroup of the whole group, yielding the boundary mesh.

use coxgroup::{Coset, CoxeterGroup, GenSet, GroupResult, combinations, recontext_gens};
use log::debug;

use crate::mesh::{self, Mesh, Simplex, apply, fan, merge};

/// Whether restricting `g_gens` to `sg_gens` reverses orientation.
///
/// Only a corank-1 restriction can reverse: the result is the parity of the
/// first position at which `sg_gens` (renamed into `g_gens` positions)
/// departs from the identity, or the parity of `sg_gens.len()` when it
/// never departs.
pub fn get_parity(context: &CoxeterGroup, g_gens: &[u8], sg_gens: &[u8]) -> usize {
    if g_gens.len() != sg_gens.len() + 1 {
        return 0;
    }

    let proper = recontext_gens(context.rank(), g_gens, sg_gens);
    let mut i = 0;
    while i < proper.len() && proper[i] as usize == i {
        i += 1;
    }
    i & 1
}

/// Reindexes a mesh whose vertices are cosets in the `⟨sg_gens⟩` frame into
/// the `⟨g_gens⟩` frame, flipping all orientations if the restriction is
/// orientation-reversing.
pub fn recontext(
    mesh: &mut Mesh,
    context: &CoxeterGroup,
    g_gens: &[u8],
    sg_gens: &[u8],
) -> GroupResult<()> {
    let proper = recontext_gens(context.rank(), g_gens, sg_gens);

    let table = context.solve_within(g_gens, &[])?;
    let path = context.solve_within(sg_gens, &[])?.path();

    let map = path.walk_with(Coset::BASE, &proper, |&c, &g| table.get(c, g));

    for prim in mesh.iter_mut() {
        for vertex in prim.iter_mut() {
            *vertex = map[vertex.index()];
        }
    }

    if get_parity(context, g_gens, sg_gens) == 1 {
        mesh::flip_mesh(mesh);
    }
    Ok(())
}

/// Tiles `base` across the cosets of `⟨sg_gens⟩` within `⟨g_gens⟩`,
/// returning one mesh per coset. The first entry is the reindexed base
/// itself; each further entry is its image under the spanning-path step
/// that reaches that coset.
pub fn each_tile(
    mut base: Mesh,
    context: &CoxeterGroup,
    g_gens: &[u8],
    sg_gens: &[u8],
) -> GroupResult<Vec<Mesh>> {
    recontext(&mut base, context, g_gens, sg_gens)?;

    let table = context.solve_within(g_gens, &[])?;
    let path = context.solve_within(g_gens, sg_gens)?.path();

    Ok(path.walk(base, |from, r#gen| {
        let mut next = from.clone();
        apply(&table, r#gen, &mut next);
        next
    }))
}

/// [`each_tile`], merged into a single mesh.
pub fn tile(
    base: Mesh,
    context: &CoxeterGroup,
    g_gens: &[u8],
    sg_gens: &[u8],
) -> GroupResult<Mesh> {
    Ok(merge(each_tile(base, context, g_gens, sg_gens)?))
}

/// Builds the simplex mesh filling the region of `⟨g_gens⟩`: a mesh of
/// dimension `g_gens.len() + 1` whose vertices are cosets in the
/// `⟨g_gens⟩` frame.
pub fn triangulate(context: &CoxeterGroup, g_gens: &[u8]) -> GroupResult<Mesh> {
    if g_gens.is_empty() {
        return Ok(vec![Simplex::from_slice(&[Coset::BASE])]);
    }

    let mut meshes = Vec::new();
    for sg_gens in combinations(g_gens, g_gens.len() - 1) {
        let base = triangulate(context, &sg_gens)?;
        let base_len = base.len();

        // The copy of the base mesh on the root coset would be fanned into
        // degenerate simplices; drop it.
        let mut raised = tile(base, context, g_gens, &sg_gens)?;
        raised.drain(..base_len);

        meshes.push(fan(raised, Coset::BASE));
    }
    Ok(merge(meshes))
}

/// Builds the boundary mesh of the polytope of `group`: one tiling pass per
/// facet subgroup in `all_sg_gens`, skipping those listed in `exclude`.
/// Returns the per-coset tiles of every pass, unmerged.
///
/// `exclude` entries are compared elementwise, so they must use the same
/// sorted order that [`combinations`] emits.
pub fn hull(
    group: &CoxeterGroup,
    all_sg_gens: impl IntoIterator<Item = GenSet>,
    exclude: &[GenSet],
) -> GroupResult<Vec<Mesh>> {
    let g_gens = group.gens();

    let mut parts = Vec::new();
    for sg_gens in all_sg_gens {
        if exclude.contains(&sg_gens) {
            continue;
        }

        let base = triangulate(group, &sg_gens)?;
        let tiles = each_tile(base, group, g_gens, &sg_gens)?;
        debug!(
            "hull pass [{sg_gens:?}] of {group}: {} tiles",
            tiles.len()
        );
        parts.extend(tiles);
    }
    Ok(parts)
}
