//! Binary search over a monotone predicate.
//!
//! [`lower_bound`] returns the first position in `items` where `pred` holds,
//! assuming `pred` is `false` for some prefix and `true` for the rest. If the
//! predicate never holds, it returns `items.len()`.
//!
//! The search performs $O(\log n)$ predicate evaluations and never touches an
//! element outside `items`.

/// Return the smallest `i` such that `pred(&items[i])` is true, or
/// `items.len()` if there is none.
///
/// `pred` must be monotone over `items`: once it returns `true`, it returns
/// `true` for every later element.
pub fn lower_bound<T, F>(items: &[T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut low = 0usize;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if pred(&items[mid]) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}
