//! Tree implementations.
//!
//! Currently this holds a single tree, the packed, array-backed [`SegmentTree`].

pub mod segment_tree;

pub use segment_tree::{LeavesMut, SegmentTree, DEFAULT_REBUILD_THRESHOLD};
