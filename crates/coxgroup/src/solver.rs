//! Todd-Coxeter coset enumeration.
//!
//! The solver fills a coset table by alternating two moves: *define* (pick
//! the first unknown `(coset, gen)` cell in scan order and allocate a fresh
//! coset for it) and *deduce* (trace every braid relation through the new
//! edge; a relator word that closes forces another table entry, which may
//! close further relators). Deduced entries are queued as flat
//! `coset * rank + gen` indices in a max-heap so that, within one burst,
//! entries at larger cosets are resolved before smaller ones.

use std::collections::BinaryHeap;

use log::debug;

use crate::cosets::TableBuilder;
use crate::{Coset, Cosets, CoxeterGroup, GroupResult, Relation, recontext_gens};

impl CoxeterGroup {
    /// Enumerates the right cosets of the subgroup generated by `sub_gens`,
    /// returning the complete table of the generator action on them.
    ///
    /// Terminates whenever the subgroup has finite index. An infinite-index
    /// subgroup makes the enumeration grow without bound; callers that
    /// cannot rule this out must bound the computation externally.
    pub fn solve(&self, sub_gens: &[u8]) -> GroupResult<Cosets> {
        let rank = self.rank();
        let mut table = TableBuilder::new(rank);
        table.add_row()?;

        if rank == 0 {
            return table.finish();
        }

        for &r#gen in sub_gens {
            debug_assert!((r#gen as usize) < rank, "subgroup generator out of range");
            if (r#gen as usize) < rank {
                table.put(Coset::BASE, r#gen, Coset::BASE);
            }
        }

        let mut rels = RelationTables::new(self);
        rels.add_row();
        rels.init_row(Coset::BASE, &table);

        let mut facts = BinaryHeap::new();

        let mut coset = 0;
        while coset < table.order() {
            for g in 0..rank {
                let r#gen = g as u8;
                if table.get(Coset(coset as u32), r#gen).is_some() {
                    continue;
                }

                let target = table.add_row()?;
                rels.add_row();

                facts.push(coset * rank + g);

                while let Some(fact) = facts.pop() {
                    let c = Coset((fact / rank) as u32);
                    let g = (fact % rank) as u8;

                    if table.get(c, g).is_some() {
                        continue;
                    }
                    table.put(c, g, target);
                    rels.learn(c, g, target, &mut facts);
                }

                rels.init_row(target, &table);
            }
            coset += 1;
        }

        let cosets = table.finish()?;
        debug!(
            "solved {} over [{}]: {} cosets",
            self.name(),
            sub_gens.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(", "),
            cosets.order()
        );
        Ok(cosets)
    }

    /// Enumerates the cosets of `⟨inner⟩` inside the subgroup `⟨outer⟩` of
    /// this group. Both subsets are sorted lists of this group's generators
    /// with `inner ⊆ outer`; the resulting table's columns are the `outer`
    /// generators in order.
    pub fn solve_within(&self, outer: &[u8], inner: &[u8]) -> GroupResult<Cosets> {
        let proper = recontext_gens(self.rank(), outer, inner);
        self.subgroup(outer).solve(&proper)
    }
}

/// Progress of one braid relation's relator word at one coset.
///
/// `gnr` counts how many letters of the relator `(g_i g_j)^m` have been
/// traced through rows that share the same walk; `lst` is the cell tracking
/// the last coset that walk has reached. Rows discovered to lie on the same
/// relator cycle alias the same cell, so a write by whichever row reaches
/// the second-to-last letter is seen by the row that closes the word.
/// Negative `gnr` means the walk runs from the mirrored end of the word;
/// `gnr == -1` with the shared null cell marks a row that can never close
/// because one of the relation's generators fixes the coset.
#[derive(Debug, Default, Copy, Clone)]
struct RelRow {
    gnr: i32,
    lst: Option<u32>,
}

/// Shared slot for rows whose relation is trivially satisfied. Never read.
const NULL_CELL: u32 = 0;

/// Per-relation deduction state for every coset, plus the arena of shared
/// `lst` cells. Rows borrow cells by arena index; the arena frees them all
/// at once when the solve finishes.
struct RelationTables {
    rank: usize,
    rels: Vec<Relation>,
    /// For each generator, the relations that mention it.
    deps: Vec<Vec<usize>>,
    /// Row state, indexed by `coset * rels.len() + rel`.
    rows: Vec<RelRow>,
    /// `lst` cell arena. Slot 0 is reserved for [`NULL_CELL`].
    cells: Vec<Coset>,
}

impl RelationTables {
    fn new(group: &CoxeterGroup) -> Self {
        let rank = group.rank();
        let rels = group.relations();

        let mut deps = vec![vec![]; rank];
        for (irel, rel) in rels.iter().enumerate() {
            deps[rel.gens[0] as usize].push(irel);
            deps[rel.gens[1] as usize].push(irel);
        }

        RelationTables {
            rank,
            rels,
            deps,
            rows: vec![],
            cells: vec![Coset::BASE],
        }
    }

    /// Appends a row of unset state for a newly allocated coset.
    fn add_row(&mut self) {
        self.rows
            .extend(std::iter::repeat_n(RelRow::default(), self.rels.len()));
    }

    fn alloc_cell(&mut self) -> u32 {
        let idx = self.cells.len() as u32;
        self.cells.push(Coset::BASE);
        idx
    }

    /// Gives every still-unset row of `target` its starting state: a fresh
    /// walk cell, unless one of the relation's generators fixes `target`, in
    /// which case the row is inert.
    fn init_row(&mut self, target: Coset, table: &TableBuilder) {
        for irel in 0..self.rels.len() {
            let ti = target.index() * self.rels.len() + irel;
            if self.rows[ti].lst.is_some() {
                continue;
            }

            let rel = self.rels[irel];
            if table.get(target, rel.gens[0]) == Some(target)
                || table.get(target, rel.gens[1]) == Some(target)
            {
                self.rows[ti] = RelRow {
                    gnr: -1,
                    lst: Some(NULL_CELL),
                };
            } else {
                let cell = self.alloc_cell();
                self.rows[ti] = RelRow {
                    gnr: 0,
                    lst: Some(cell),
                };
            }
        }
    }

    /// Propagates the new edge `coset · gen = target` through every relation
    /// that mentions `gen`, queueing any forced table entries.
    fn learn(&mut self, coset: Coset, r#gen: u8, target: Coset, facts: &mut BinaryHeap<usize>) {
        let nrels = self.rels.len();

        if target == coset {
            // The generator fixes the new coset; unset rows mentioning it
            // can never close.
            for di in 0..self.deps[r#gen as usize].len() {
                let irel = self.deps[r#gen as usize][di];
                let ti = target.index() * nrels + irel;
                if self.rows[ti].lst.is_none() {
                    self.rows[ti].gnr = -1;
                }
            }
        }

        for di in 0..self.deps[r#gen as usize].len() {
            let irel = self.deps[r#gen as usize][di];
            let ti = target.index() * nrels + irel;
            let ci = coset.index() * nrels + irel;

            if self.rows[ti].lst.is_some() {
                continue;
            }

            let rel = self.rels[irel];

            // Extend the source row's walk by one letter. When `target`
            // coincides with `coset` the two rows are the same slot, and the
            // second read below deliberately observes the first write.
            self.rows[ti].lst = self.rows[ci].lst;
            self.rows[ti].gnr = self.rows[ci].gnr + 1;
            if self.rows[ci].gnr < 0 {
                self.rows[ti].gnr -= 2;
            }

            let row = self.rows[ti];
            let mult = rel.mult as i32;

            if row.gnr == mult {
                // Forward learn: the relator closed, so the other generator
                // must send the walk's last coset to `target`.
                let lst = self.cells[row.lst.expect("closed relator without a walk cell") as usize];
                facts.push(lst.index() * self.rank + rel.other(r#gen) as usize);
            } else if row.gnr == -mult {
                // Stationary learn: closed from the mirrored end.
                facts.push(target.index() * self.rank + rel.other(r#gen) as usize);
            } else if row.gnr == mult - 1 {
                // One letter short: publish `target` to every row sharing
                // this walk so the closing step can find it.
                let cell = row.lst.expect("active walk without a cell");
                self.cells[cell as usize] = target;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog;

    use super::*;

    #[track_caller]
    fn assert_index(group: &CoxeterGroup, sub_gens: &[u8], expected: usize) {
        let cosets = group.solve(sub_gens).unwrap();
        assert_eq!(
            cosets.order(),
            expected,
            "wrong index for {} over {sub_gens:?}",
            group.name()
        );
    }

    #[test]
    fn test_polyhedral_orders() {
        assert_index(&CoxeterGroup::schlafli(&[5, 3]).unwrap(), &[], 120);
        assert_index(&CoxeterGroup::schlafli(&[5, 3]).unwrap(), &[0], 60);
        assert_index(&CoxeterGroup::schlafli(&[4, 3]).unwrap(), &[], 48);
        assert_index(&CoxeterGroup::schlafli(&[4, 3, 3]).unwrap(), &[0], 192);
        assert_index(&CoxeterGroup::schlafli(&[5, 3, 3]).unwrap(), &[], 14400);
    }

    #[test]
    fn test_catalog_orders() {
        assert_index(&catalog::a(3), &[], 24);
        assert_index(&catalog::b(4), &[], 384);
        assert_index(&catalog::d(4), &[], 192);
        assert_index(&catalog::f4(), &[], 1152);
        assert_index(&catalog::g2(), &[], 12);
        assert_index(&catalog::h(3), &[], 120);
        assert_index(&catalog::i2(7), &[], 14);
        assert_index(&catalog::u(3), &[], 8);
    }

    #[test]
    fn test_toroidal_orders() {
        assert_index(&catalog::t(100, 100), &[], 40000);
        assert_index(&catalog::t(100, 100), &[0], 20000);
        assert_index(&catalog::t(3, 5), &[], 60);
    }

    #[test]
    fn test_product_and_power_orders() {
        let prod = catalog::i2(3).product(&catalog::i2(4));
        assert_index(&prod, &[], 48);

        let a1_cubed = catalog::a(1).power(3);
        assert_index(&a1_cubed, &[], 8);
    }

    // The large exceptional groups take a while without optimizations.
    #[test]
    #[cfg(not(debug_assertions))]
    fn test_exceptional_orders() {
        assert_index(&catalog::e(6), &[], 51840);
        assert_index(&catalog::e(6), &[0], 25920);
        assert_index(&catalog::e(7), &[0], 1451520);
        assert_index(&catalog::b(6), &[], 46080);
    }

    #[test]
    fn test_trivial_groups() {
        assert_index(&catalog::a(0), &[], 1);
        assert_index(&catalog::a(1), &[], 2);
        assert_index(&catalog::a(1), &[0], 1);
    }

    #[test]
    fn test_subgroup_gens_fix_base_coset() {
        let table = catalog::b(4).solve(&[1, 3]).unwrap();
        assert_eq!(table.get(Coset::BASE, 1), Coset::BASE);
        assert_eq!(table.get(Coset::BASE, 3), Coset::BASE);
        assert_ne!(table.get(Coset::BASE, 0), Coset::BASE);
    }

    #[test]
    fn test_table_is_involutive_and_complete() {
        let table = catalog::h(3).solve(&[0]).unwrap();
        for c in 0..table.order() {
            for g in 0..table.rank() as u8 {
                let d = table.get(Coset(c as u32), g);
                assert!(d.index() < table.order());
                assert_eq!(table.get(d, g), Coset(c as u32));
            }
        }
    }

    #[test]
    fn test_relator_cycles_close() {
        let group = catalog::f4();
        let table = group.solve(&[2]).unwrap();
        for rel in group.relations() {
            for c in 0..table.order() {
                let mut d = Coset(c as u32);
                for _ in 0..rel.mult {
                    d = table.get(d, rel.gens[0]);
                    d = table.get(d, rel.gens[1]);
                }
                assert_eq!(d, Coset(c as u32), "relator {rel:?} does not close");
            }
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let group = catalog::h(3);
        assert_eq!(group.solve(&[1]).unwrap(), group.solve(&[1]).unwrap());
    }

    #[test]
    fn test_solve_within() {
        // ⟨g1, g2, g3⟩ of the 600-cell group is the A3 simplex group; its
        // subgroup on the last two generators has index 4.
        let group = CoxeterGroup::schlafli(&[5, 3, 3]).unwrap();
        let cosets = group.solve_within(&[1, 2, 3], &[2, 3]).unwrap();
        assert_eq!(cosets.rank(), 3);
        assert_eq!(cosets.order(), 4);

        let elements = group.solve_within(&[1, 2, 3], &[]).unwrap();
        assert_eq!(elements.order(), 24);
    }
}
