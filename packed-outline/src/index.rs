//! Index normalization.
//!
//! Contour indices and contour-relative point indices may be negative, in
//! which case they count back from the end of the sequence they index.

/// Resolves a possibly negative `index` into a sequence of length `len`.
///
/// Negative values count from the end, so `-1` is the last item. When
/// `for_insert` is true the position one past the end is also accepted,
/// which allows inserting at the end of the sequence.
///
/// Returns `None` if the index is out of range after normalization.
pub fn normalize_index(index: isize, len: usize, for_insert: bool) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let resolved = if index < 0 { index + len } else { index };
    let limit = if for_insert { len + 1 } else { len };
    (0..limit).contains(&resolved).then_some(resolved as usize)
}
