//! Page slicing logic
//!
//! Pure functions that split an ordered collection into fixed-size pages.
//! Nothing here keeps the page index valid; that is the navigator's job.
//! These functions clamp instead of failing so a stale index renders an
//! empty page rather than panicking.

/// Number of pages needed for `total_records` items
///
/// Never returns zero: an empty collection still has one (empty) page.
/// A `page_size` of zero is treated as 1.
///
/// # Examples
/// ```
/// use themedeck::logic::pagination::page_count;
///
/// assert_eq!(page_count(0, 3), 1);
/// assert_eq!(page_count(7, 3), 3);
/// assert_eq!(page_count(9, 3), 3);
/// assert_eq!(page_count(10, 3), 4);
/// ```
pub fn page_count(total_records: usize, page_size: usize) -> usize {
    total_records.div_ceil(page_size.max(1)).max(1)
}

/// Items visible on `page`
///
/// Returns `records[page * page_size .. page * page_size + page_size]`,
/// clamped to the end of the collection. A page past the end yields an
/// empty slice.
///
/// # Examples
/// ```
/// use themedeck::logic::pagination::slice;
///
/// let records = [0, 1, 2, 3, 4, 5, 6];
/// assert_eq!(slice(&records, 3, 0), &[0, 1, 2]);
/// assert_eq!(slice(&records, 3, 2), &[6]);
/// assert!(slice(&records, 3, 3).is_empty());
/// ```
pub fn slice<T>(records: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}
