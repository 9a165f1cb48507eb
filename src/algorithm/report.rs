use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::graph::Weight;

/// Borrowed view of a distance table as `(vertex, distance)` pairs
///
/// Iterating never mutates anything and can be restarted with [`Report::iter`].
/// The `Display` form prints one `vertex<TAB>distance` line per vertex followed by
/// a blank line.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a, W>
where
    W: Weight,
{
    distances: &'a [W],
}

impl<'a, W> Report<'a, W>
where
    W: Weight,
{
    pub fn new(distances: &'a [W]) -> Self {
        Report { distances }
    }

    /// Returns a fresh iterator over the entries
    pub fn iter(&self) -> Entries<'a, W> {
        Entries {
            inner: self.distances.iter().enumerate(),
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<'a, W> IntoIterator for Report<'a, W>
where
    W: Weight,
{
    type Item = (usize, W);
    type IntoIter = Entries<'a, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W> fmt::Display for Report<'_, W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, distance) in self.iter() {
            writeln!(f, "{}\t{}", vertex, distance)?;
        }
        writeln!(f)
    }
}

/// Iterator over the entries of a [`Report`]
#[derive(Debug, Clone)]
pub struct Entries<'a, W> {
    inner: Enumerate<slice::Iter<'a, W>>,
}

impl<W> Iterator for Entries<'_, W>
where
    W: Weight,
{
    type Item = (usize, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(vertex, &distance)| (vertex, distance))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<W> ExactSizeIterator for Entries<'_, W> where W: Weight {}

impl<W> FusedIterator for Entries<'_, W> where W: Weight {}
