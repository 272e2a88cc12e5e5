use std::cmp::Ordering;

/// Frontier entry: a flat cell index with the tentative distance it was
/// pushed with.
///
/// Ordered for `BinaryHeap` (a max-heap) so that the smallest distance pops
/// first, and among equal distances the earliest push pops first. The
/// sequence number makes the pop order, and therefore the returned path,
/// independent of the heap's internal layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) dist: u64,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
