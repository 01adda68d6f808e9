//! Navigation index logic
//!
//! Pure functions for circular index arithmetic. Both the carousel pages and
//! the command palette selection wrap around at either end.

/// Wrap a signed index into `[0, len)` using a true modulo
///
/// Rust's `%` keeps the sign of the dividend (`-1 % 3 == -1`), so this uses
/// `rem_euclid`, which is always non-negative for a positive divisor.
///
/// A `len` of zero has no valid index; the result is 0.
///
/// # Examples
/// ```
/// use themedeck::logic::navigation::wrap_index;
///
/// assert_eq!(wrap_index(3, 3), 0);   // Past the end lands on the first
/// assert_eq!(wrap_index(-1, 3), 2);  // Before the start lands on the last
/// assert_eq!(wrap_index(-4, 3), 2);
/// assert_eq!(wrap_index(1, 3), 1);
/// ```
pub fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    index.rem_euclid(len as i64) as usize
}

/// Move a selection by `delta` with wrap-around
///
/// # Arguments
/// * `current` - Current selection index (None if nothing is selected)
/// * `list_len` - Total number of items in the list
/// * `delta` - Signed step (+1 = down/next, -1 = up/previous)
///
/// # Returns
/// * `Some(index)` - The new selection
/// * `None` - If the list is empty
///
/// With no current selection, a forward step selects the first item and a
/// backward step selects the last.
///
/// # Examples
/// ```
/// use themedeck::logic::navigation::step_selection;
///
/// assert_eq!(step_selection(None, 0, 1), None);
/// assert_eq!(step_selection(None, 3, 1), Some(0));
/// assert_eq!(step_selection(None, 3, -1), Some(2));
/// assert_eq!(step_selection(Some(2), 3, 1), Some(0));
/// assert_eq!(step_selection(Some(0), 3, -1), Some(2));
/// ```
pub fn step_selection(current: Option<usize>, list_len: usize, delta: i64) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    let next = match current {
        Some(i) => i as i64 + delta,
        None if delta >= 0 => delta - 1,
        None => list_len as i64 + delta,
    };

    Some(wrap_index(next, list_len))
}
