use std::fmt;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{GroupError, GroupResult};

/// Maximum number of generators a group may have. Generator indices are
/// `u8`, so ranks up to 256 are addressable.
pub const MAX_RANK: usize = 256;

/// Ordered set of generator indices, sorted ascending.
pub type GenSet = SmallVec<[u8; 8]>;

/// A braid relation `(g_i g_j)^m = e` between two distinct generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Relation {
    /// The two generators involved, with `gens[0] < gens[1]`.
    pub gens: [u8; 2],
    /// Order of the product of the two generators.
    pub mult: u32,
}

impl Relation {
    /// Returns the generator of the pair that is not `gen`.
    pub fn other(self, r#gen: u8) -> u8 {
        if self.gens[0] == r#gen {
            self.gens[1]
        } else {
            self.gens[0]
        }
    }
}

/// A Coxeter matrix with a display name.
///
/// Entry `(i, j)` is the order of the product `g_i g_j`: 1 on the diagonal
/// (every generator is an involution) and at least 2 everywhere else, where
/// 2 means the generators commute.
///
/// Subgroups reuse this type. For a group built by [`CoxeterGroup::subgroup`],
/// [`gens`](CoxeterGroup::gens) holds the indices of the selected generators
/// in the parent group; for every other constructor it is `0..rank`.
#[derive(Debug, Clone)]
pub struct CoxeterGroup {
    name: String,
    gens: GenSet,
    rank: usize,
    mults: Vec<u32>,
}

impl Eq for CoxeterGroup {}
impl PartialEq for CoxeterGroup {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.mults == other.mults
    }
}

impl fmt::Display for CoxeterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl CoxeterGroup {
    /// Constructs the universal group of the given rank: every pair of
    /// distinct generators has product order 2, so no pair braids.
    pub fn new(rank: usize) -> Self {
        Self::new_named(rank, format!("G({rank})"))
    }

    pub(crate) fn new_named(rank: usize, name: impl Into<String>) -> Self {
        assert!(rank <= MAX_RANK, "rank {rank} exceeds {MAX_RANK}");
        let mut mults = vec![2; rank * rank];
        for i in 0..rank {
            mults[i * rank + i] = 1;
        }
        CoxeterGroup {
            name: name.into(),
            gens: (0..rank).map(|i| i as u8).collect(),
            rank,
            mults,
        }
    }

    /// Constructs a linear-diagram group from a simplified Schläfli symbol:
    /// `symbol[i]` becomes the product order of the adjacent generators
    /// `g_i` and `g_{i+1}`. The name is the bracketed symbol.
    pub fn schlafli(symbol: &[u32]) -> GroupResult<Self> {
        let name = format!("[{}]", symbol.iter().join(", "));
        Self::schlafli_named(symbol, name)
    }

    /// Same as [`CoxeterGroup::schlafli`], with an explicit name.
    pub fn schlafli_named(symbol: &[u32], name: impl Into<String>) -> GroupResult<Self> {
        let rank = symbol.len() + 1;
        if rank > MAX_RANK {
            return Err(GroupError::TooManyGenerators);
        }
        if symbol.iter().any(|&m| m < 2) {
            return Err(GroupError::BadMatrix);
        }

        let mut res = Self::new_named(rank, name);
        for (i, &m) in symbol.iter().enumerate() {
            res.set(i as u8, i as u8 + 1, m);
        }
        Ok(res)
    }

    /// Constructs and validates a group from a full Coxeter matrix.
    pub fn from_matrix(rows: Vec<Vec<u32>>, name: impl Into<String>) -> GroupResult<Self> {
        let rank = rows.len();
        if rank > MAX_RANK {
            return Err(GroupError::TooManyGenerators);
        }
        if rows.iter().any(|r| r.len() != rank) {
            return Err(GroupError::BadMatrix);
        }
        for i in 0..rank {
            for j in 0..=i {
                if rows[i][j] != rows[j][i] {
                    return Err(GroupError::BadMatrix);
                }
                if (i == j) != (rows[i][j] == 1) {
                    return Err(GroupError::BadMatrix);
                }
            }
        }

        Ok(CoxeterGroup {
            name: name.into(),
            gens: (0..rank).map(|i| i as u8).collect(),
            rank,
            mults: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of generators.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Display name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generator indices of this group within its parent. `0..rank` unless
    /// the group was built by [`CoxeterGroup::subgroup`].
    pub fn gens(&self) -> &GenSet {
        &self.gens
    }

    /// Returns the order of the product `g_i g_j`.
    pub fn get(&self, i: u8, j: u8) -> u32 {
        self.mults[i as usize * self.rank + j as usize]
    }

    /// Overwrites the product order of a pair of distinct generators,
    /// keeping the matrix symmetric.
    pub fn set(&mut self, i: u8, j: u8, mult: u32) {
        debug_assert_ne!(i, j, "the diagonal is fixed at 1");
        self.mults[i as usize * self.rank + j as usize] = mult;
        self.mults[j as usize * self.rank + i as usize] = mult;
    }

    /// The braid relations of the group: one [`Relation`] per unordered pair
    /// of distinct generators, in lexicographic order.
    pub fn relations(&self) -> Vec<Relation> {
        let mut res = Vec::with_capacity(self.rank * self.rank.saturating_sub(1) / 2);
        for i in 0..self.rank {
            for j in (i + 1)..self.rank {
                res.push(Relation {
                    gens: [i as u8, j as u8],
                    mult: self.get(i as u8, j as u8),
                });
            }
        }
        res
    }

    /// Restricts the matrix to a sorted subset of this group's generators.
    ///
    /// The result's [`gens`](CoxeterGroup::gens) records `sel` so that local
    /// generator indices can be mapped back to this group.
    pub fn subgroup(&self, sel: &[u8]) -> CoxeterGroup {
        debug_assert!(sel.windows(2).all(|w| w[0] < w[1]), "unsorted subset");
        debug_assert!(sel.iter().all(|&g| (g as usize) < self.rank));

        let srank = sel.len();
        let mut mults = vec![1; srank * srank];
        for (i, &a) in sel.iter().enumerate() {
            for (j, &b) in sel.iter().enumerate() {
                mults[i * srank + j] = self.get(a, b);
            }
        }

        CoxeterGroup {
            name: format!("{}:[{}]", self.name, sel.iter().join(", ")),
            gens: SmallVec::from_slice(sel),
            rank: srank,
            mults,
        }
    }

    /// All `C(rank, k)` subgroups generated by `k` of this group's
    /// generators, with subsets in lexicographic order.
    pub fn subgroups(&self, k: usize) -> Vec<CoxeterGroup> {
        let local: GenSet = (0..self.rank).map(|i| i as u8).collect();
        combinations(&local, k)
            .iter()
            .map(|sel| self.subgroup(sel))
            .collect()
    }

    /// Direct product of two groups: the block-diagonal matrix in which
    /// every cross pair commutes.
    pub fn product(&self, other: &CoxeterGroup) -> CoxeterGroup {
        let mut res = Self::new_named(
            self.rank + other.rank,
            format!("{}*{}", self.name, other.name),
        );
        for i in 0..self.rank {
            for j in (i + 1)..self.rank {
                res.set(i as u8, j as u8, self.get(i as u8, j as u8));
            }
        }
        let off = self.rank;
        for i in 0..other.rank {
            for j in (i + 1)..other.rank {
                res.set((off + i) as u8, (off + j) as u8, other.get(i as u8, j as u8));
            }
        }
        res
    }

    /// `p`-fold direct product of the group with itself.
    pub fn power(&self, p: usize) -> CoxeterGroup {
        let mut res = Self::new_named(self.rank * p, format!("{}^{p}", self.name));
        for k in 0..p {
            let off = k * self.rank;
            for i in 0..self.rank {
                for j in (i + 1)..self.rank {
                    res.set((off + i) as u8, (off + j) as u8, self.get(i as u8, j as u8));
                }
            }
        }
        res
    }
}

/// All `k`-element subsets of `gens`, in lexicographic order.
pub fn combinations(gens: &[u8], k: usize) -> Vec<GenSet> {
    gens.iter()
        .copied()
        .combinations(k)
        .map(GenSet::from)
        .collect()
}

/// Maps generator names from a parent subset to positions in that subset.
///
/// Both arguments are sorted subsets of `0..rank` with `sg_gens ⊆ g_gens`;
/// the result holds, for each element of `sg_gens`, its position within
/// `g_gens`. Since both inputs are sorted, so is the result.
pub fn recontext_gens(rank: usize, g_gens: &[u8], sg_gens: &[u8]) -> GenSet {
    debug_assert!(g_gens.iter().all(|&g| (g as usize) < rank));
    sg_gens
        .iter()
        .map(|&sg| {
            g_gens
                .iter()
                .position(|&g| g == sg)
                .expect("sg_gens is not a subset of g_gens") as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schlafli_matrix() {
        let g = CoxeterGroup::schlafli(&[5, 3]).unwrap();
        assert_eq!(g.rank(), 3);
        assert_eq!(g.name(), "[5, 3]");
        assert_eq!(g.get(0, 0), 1);
        assert_eq!(g.get(0, 1), 5);
        assert_eq!(g.get(1, 0), 5);
        assert_eq!(g.get(1, 2), 3);
        assert_eq!(g.get(0, 2), 2);
    }

    #[test]
    fn test_schlafli_rejects_small_entries() {
        assert_eq!(CoxeterGroup::schlafli(&[3, 1]), Err(GroupError::BadMatrix));
        assert_eq!(CoxeterGroup::schlafli(&[0]), Err(GroupError::BadMatrix));
    }

    #[test]
    fn test_from_matrix_validation() {
        let ok = CoxeterGroup::from_matrix(vec![vec![1, 4], vec![4, 1]], "B2");
        assert_eq!(ok.unwrap(), CoxeterGroup::schlafli(&[4]).unwrap());

        let asymmetric = CoxeterGroup::from_matrix(vec![vec![1, 4], vec![3, 1]], "bad");
        assert_eq!(asymmetric, Err(GroupError::BadMatrix));

        let bad_diagonal = CoxeterGroup::from_matrix(vec![vec![2, 3], vec![3, 1]], "bad");
        assert_eq!(bad_diagonal, Err(GroupError::BadMatrix));

        let ragged = CoxeterGroup::from_matrix(vec![vec![1, 3], vec![3]], "bad");
        assert_eq!(ragged, Err(GroupError::BadMatrix));
    }

    #[test]
    fn test_subgroup_restricts_matrix() {
        let g = CoxeterGroup::schlafli(&[5, 3, 3]).unwrap();
        let sub = g.subgroup(&[0, 2, 3]);

        assert_eq!(sub.rank(), 3);
        assert_eq!(sub.gens().as_slice(), &[0, 2, 3]);
        assert_eq!(sub.get(0, 1), g.get(0, 2));
        assert_eq!(sub.get(1, 2), g.get(2, 3));
        assert_eq!(sub.name(), "[5, 3, 3]:[0, 2, 3]");
    }

    #[test]
    fn test_subgroup_of_all_gens_is_identity() {
        let g = CoxeterGroup::schlafli(&[4, 3]).unwrap();
        let sub = g.subgroup(&[0, 1, 2]);
        assert_eq!(sub, g);
    }

    #[test]
    fn test_subgroups_order_and_count() {
        let g = CoxeterGroup::schlafli(&[4, 3]).unwrap();
        let subs = g.subgroups(2);
        let gens: Vec<_> = subs.iter().map(|s| s.gens().to_vec()).collect();
        assert_eq!(gens, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);

        assert_eq!(CoxeterGroup::new(5).subgroups(3).len(), 10);
    }

    #[test]
    fn test_combinations_order() {
        let all: GenSet = (0..4).collect();
        let combos = combinations(&all, 2);
        let expected: Vec<&[u8]> = vec![
            &[0, 1],
            &[0, 2],
            &[0, 3],
            &[1, 2],
            &[1, 3],
            &[2, 3],
        ];
        assert_eq!(combos.len(), 6);
        for (got, want) in combos.iter().zip(expected) {
            assert_eq!(got.as_slice(), want);
        }

        assert_eq!(combinations(&all, 0), vec![GenSet::new()]);
    }

    #[test]
    fn test_recontext_gens() {
        assert_eq!(
            recontext_gens(4, &[0, 1, 2, 3], &[0, 2, 3]).as_slice(),
            &[0, 2, 3]
        );
        assert_eq!(recontext_gens(4, &[1, 3], &[3]).as_slice(), &[1]);
        assert_eq!(recontext_gens(4, &[1, 3], &[]).as_slice(), &[] as &[u8]);

        let res = recontext_gens(6, &[0, 2, 4, 5], &[2, 5]);
        assert!(res.windows(2).all(|w| w[0] < w[1]));
        assert!(res.iter().all(|&p| (p as usize) < 4));
    }

    #[test]
    fn test_product_and_power_matrices() {
        let i3 = CoxeterGroup::schlafli(&[3]).unwrap();
        let i4 = CoxeterGroup::schlafli(&[4]).unwrap();

        let prod = i3.product(&i4);
        assert_eq!(prod.rank(), 4);
        assert_eq!(prod.get(0, 1), 3);
        assert_eq!(prod.get(2, 3), 4);
        assert_eq!(prod.get(1, 2), 2);
        assert_eq!(prod.name(), "[3]*[4]");

        let cube = i4.power(2);
        assert_eq!(cube.rank(), 4);
        assert_eq!(cube.get(0, 1), 4);
        assert_eq!(cube.get(2, 3), 4);
        assert_eq!(cube.get(0, 2), 2);
    }
}
