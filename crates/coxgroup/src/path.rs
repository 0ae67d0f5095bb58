use crate::{Coset, Cosets};

/// Spanning tree over the coset graph, rooted at the base coset.
///
/// For every coset `c > 0` the path records the `(source, gen)` edge that
/// first reaches `c` when the table is scanned in `(coset, gen)` order; the
/// source always has a smaller index than `c`. Replaying those edges visits
/// every coset exactly once, which [`Path::walk`] uses to evaluate an
/// arbitrary step function across the whole table in a single pass.
#[derive(Debug, Clone)]
pub struct Path {
    source: Vec<Coset>,
    r#gen: Vec<u8>,
}

impl Cosets {
    /// Derives the spanning path of this table.
    pub fn path(&self) -> Path {
        let order = self.order();
        let mut source = vec![Coset::BASE; order];
        let mut r#gen = vec![0u8; order];
        let mut seen = vec![false; order];
        seen[Coset::BASE.index()] = true;

        for c in 0..order {
            let coset = Coset(c as u32);
            for g in 0..self.rank() {
                let target = self.get(coset, g as u8);
                if !seen[target.index()] {
                    seen[target.index()] = true;
                    source[target.index()] = coset;
                    r#gen[target.index()] = g as u8;
                }
            }
        }

        Path { source, r#gen }
    }
}

impl Path {
    /// Number of cosets the path spans.
    pub fn order(&self) -> usize {
        self.source.len()
    }

    /// Evaluates `op` across the coset tree.
    ///
    /// The result has one entry per coset: entry 0 is `start`, and the entry
    /// for any other coset is `op(&res[source], gen)` for its spanning edge.
    pub fn walk<T>(&self, start: T, mut op: impl FnMut(&T, u8) -> T) -> Vec<T> {
        let mut res = Vec::with_capacity(self.order());
        res.push(start);
        for i in 1..self.order() {
            let val = op(&res[self.source[i].index()], self.r#gen[i]);
            res.push(val);
        }
        res
    }

    /// Like [`Path::walk`], but the step function receives the value from a
    /// user-supplied array indexed by the generator.
    pub fn walk_with<T, E>(
        &self,
        start: T,
        gens: &[E],
        mut op: impl FnMut(&T, &E) -> T,
    ) -> Vec<T> {
        self.walk(start, |from, r#gen| op(from, &gens[r#gen as usize]))
    }
}
