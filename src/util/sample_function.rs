use crate::util::index_function::equidistant_indices;

/// Like `equidistant_indices`, but clamps the requested count to the
/// series length so every returned index addresses a distinct element.
/// Intended for thinning a real series (the count >= 2 arm can repeat
/// indices when asked for more samples than there are elements).
pub fn clamped_indices(len: i64, count: i64) -> Vec<i64> {
    if len <= 0 || count <= 0 {
        return Vec::new();
    }
    if len == 1 {
        return vec![0];
    }
    equidistant_indices(len, count.min(len), false)
}

/// Picks at most `count` evenly spaced elements out of `series`,
/// preserving order. For `count >= series.len()` this copies the
/// whole series.
pub fn subsample<T: Clone>(series: &[T], count: i64) -> Vec<T> {
    clamped_indices(series.len() as i64, count)
        .into_iter()
        .map(|idx| series[idx as usize].clone())
        .collect()
}
