use std::fmt;

use crate::{GroupError, GroupResult};

/// Index of a coset in a [`Cosets`] table.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Coset(pub u32);

impl Coset {
    /// The base coset, fixed by every subgroup generator.
    pub const BASE: Coset = Coset(0);

    /// Returns the index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Coset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete coset table: the right action of a group's generators on the
/// cosets of a subgroup.
///
/// Stored as a dense row-major `order × rank` array. Generators are
/// involutions, so the table is symmetric in the sense that
/// `get(c, g) == d` implies `get(d, g) == c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cosets {
    rank: usize,
    order: usize,
    data: Vec<Coset>,
}

impl Cosets {
    /// Number of generator columns.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of cosets.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the coset reached from `coset` by `gen`.
    pub fn get(&self, coset: Coset, r#gen: u8) -> Coset {
        self.data[coset.index() * self.rank + r#gen as usize]
    }
}

/// Coset table under construction: every cell starts unknown and is written
/// exactly once. [`TableBuilder::finish`] unwraps the cells into a [`Cosets`].
#[derive(Debug, Clone)]
pub(crate) struct TableBuilder {
    rank: usize,
    order: usize,
    cells: Vec<Option<Coset>>,
}

impl TableBuilder {
    pub(crate) fn new(rank: usize) -> Self {
        TableBuilder {
            rank,
            order: 0,
            cells: vec![],
        }
    }

    pub(crate) fn order(&self) -> usize {
        self.order
    }

    /// Appends an all-unknown row and returns its coset index.
    pub(crate) fn add_row(&mut self) -> GroupResult<Coset> {
        let id = u32::try_from(self.order).map_err(|_| GroupError::TooManyCosets)?;
        self.order += 1;
        self.cells.extend(std::iter::repeat_n(None, self.rank));
        Ok(Coset(id))
    }

    pub(crate) fn get(&self, coset: Coset, r#gen: u8) -> Option<Coset> {
        self.cells[coset.index() * self.rank + r#gen as usize]
    }

    /// Writes both directions of an edge: `coset · gen = target` and, since
    /// generators are involutions, `target · gen = coset`.
    pub(crate) fn put(&mut self, coset: Coset, r#gen: u8, target: Coset) {
        self.cells[coset.index() * self.rank + r#gen as usize] = Some(target);
        self.cells[target.index() * self.rank + r#gen as usize] = Some(coset);
    }

    pub(crate) fn finish(self) -> GroupResult<Cosets> {
        let data = self
            .cells
            .into_iter()
            .collect::<Option<Vec<Coset>>>()
            .ok_or(GroupError::IncompleteTable)?;
        Ok(Cosets {
            rank: self.rank,
            order: self.order,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_put_is_mutual() {
        let mut b = TableBuilder::new(2);
        let c0 = b.add_row().unwrap();
        let c1 = b.add_row().unwrap();
        assert_eq!(b.get(c0, 0), None);

        b.put(c0, 0, c1);
        assert_eq!(b.get(c0, 0), Some(c1));
        assert_eq!(b.get(c1, 0), Some(c0));

        b.put(c0, 1, c0);
        b.put(c1, 1, c1);
        let table = b.finish().unwrap();
        assert_eq!(table.order(), 2);
        assert_eq!(table.get(c0, 0), c1);
        assert_eq!(table.get(c1, 1), c1);
    }

    #[test]
    fn test_incomplete_builder_fails_to_finish() {
        let mut b = TableBuilder::new(1);
        b.add_row().unwrap();
        assert_eq!(b.finish().err(), Some(GroupError::IncompleteTable));
    }
}
