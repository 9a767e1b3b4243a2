use thiserror::Error;

/// Errors returned by the bounds-checked methods of [`SegmentTree`](crate::SegmentTree),
/// such as [`at`](crate::SegmentTree::at) and [`try_query`](crate::SegmentTree::try_query).
///
/// The unchecked methods treat the same situations as caller bugs and panic instead.
#[derive(Error, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SegmentTreeError {
    #[error("index {index} is out of bounds of segment tree length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("range {first}..{last} is invalid for segment tree length {len}")]
    InvalidRange { first: usize, last: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SegmentTreeError>;

/// Checks that `first..last` is a valid half open range of a sequence of length `len`.
pub(crate) fn check_range(first: usize, last: usize, len: usize) -> Result<()> {
    if first <= last && last <= len {
        Ok(())
    } else {
        Err(SegmentTreeError::InvalidRange { first, last, len })
    }
}

/// Checks that `index` points at an element of a sequence of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SegmentTreeError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks() {
        assert_eq!(check_range(0, 0, 0), Ok(()));
        assert_eq!(check_range(2, 5, 5), Ok(()));
        assert_eq!(
            check_range(3, 2, 5),
            Err(SegmentTreeError::InvalidRange { first: 3, last: 2, len: 5 })
        );
        assert!(check_range(0, 6, 5).is_err());
    }

    #[test]
    fn index_checks() {
        assert_eq!(check_index(4, 5), Ok(()));
        assert_eq!(
            check_index(5, 5),
            Err(SegmentTreeError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn messages() {
        let err = SegmentTreeError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 is out of bounds of segment tree length 3"
        );
    }
}
