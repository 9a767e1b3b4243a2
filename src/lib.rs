//! Generic segment trees over a flat array.
//!
//! A [`SegmentTree`] stores a sequence of elements, and answers queries of the form
//! "reduce all of the elements in `first..last`" in `O(log n)` time, with a user-defined
//! [`Reducer`] and [`Mapper`]. Single elements can be replaced in `O(log n)` time.
//!
//! ```
//! use packed_segment_tree::{basic_data::*, SegmentTree};
//!
//! let mut tree = SegmentTree::with_reducer(vec![0, 1, 2, 3, 4], Sum);
//! assert_eq!(tree.query(2, 5), 9);
//! tree.update(2, 5);
//! assert_eq!(tree.query(2, 5), 12);
//! ```

pub mod data;
pub mod error;
pub mod trees;

pub use data::basic_data;
pub use data::{Mapper, Reducer};
pub use error::SegmentTreeError;
pub use trees::*;
