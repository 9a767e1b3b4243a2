//! Index arithmetic of the packed layout.
//!
//! Conceptually, the internal nodes and the leaves live in one array: internal nodes
//! occupy `0..shift` and leaf `i` sits at `shift + i`. Node `k` has its children at
//! `2k + 1` and `2k + 2`. The tree keeps the internal nodes and the leaves in separate
//! buffers, but all of the arithmetic is done in terms of this one array.
//!
//! Every level of the tree is a [`Row`]: a contiguous block of the packed array that
//! starts at `base`, of which only the first `width` slots cover any leaves.
//! Since `base` is always odd (or zero for the root), the node at row-relative
//! index `j` is a right child exactly when `j` is odd.

/// The default value of the `rebuild_threshold` of a tree.
/// Trees smaller than this are always resynchronized by a full rebuild.
pub const DEFAULT_REBUILD_THRESHOLD: usize = 1000;

/// Returns the boundary between internal nodes and leaves for a tree with `len` leaves:
/// `2^ceil(log2(len)) - 1`, or `0` for an empty tree.
pub(crate) fn shift_for(len: usize) -> usize {
    if len == 0 {
        0
    } else {
        len.next_power_of_two() - 1
    }
}

/// The number of internal node slots stored for a tree with `len` leaves.
/// This includes slots which cover no leaves, except those after the last populated
/// slot of the lowest internal row.
pub(crate) fn internal_len(shift: usize, len: usize) -> usize {
    (shift + len) / 2
}

/// One level of the packed tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Row {
    /// The packed index of the first slot of this row.
    pub base: usize,
    /// How many slots of this row cover at least one leaf.
    pub width: usize,
}

impl Row {
    /// The leaf row of a tree with `len` leaves.
    pub fn leaves(shift: usize, len: usize) -> Row {
        Row { base: shift, width: len }
    }

    /// The lowest row of internal nodes. Only meaningful if the tree has at least two leaves.
    pub fn lowest(shift: usize, len: usize) -> Row {
        Row::leaves(shift, len).parent()
    }

    /// The row above this one.
    pub fn parent(self) -> Row {
        Row {
            base: self.base / 2,
            width: (self.width + 1) / 2,
        }
    }

    pub fn is_root(self) -> bool {
        self.base == 0
    }

    /// Whether the node at row-relative index `j` covers any leaves.
    pub fn is_populated(self, j: usize) -> bool {
        j < self.width
    }
}

/// The range update heuristic.
///
/// Returns true if resynchronizing `touched` leaves of a tree with `len` leaves should be done
/// with a full `O(len)` rebuild, and false if it should be done by repairing the
/// ancestors of each touched leaf separately, in `O(touched * log(len))`.
pub(crate) fn prefers_rebuild(len: usize, touched: usize, threshold: usize) -> bool {
    if len < threshold {
        return true;
    }
    // `ln(0)` is `-inf`, and `0 * -inf` is NaN: an empty tree never prefers the rebuild here.
    (len as f64) < touched as f64 * (len as f64).ln()
}
