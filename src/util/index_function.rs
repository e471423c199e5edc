use serde::Serialize;
use typed_builder::TypedBuilder;

/// The parameters of a single index computation, bundled so they
/// can be built up from the command line options and echoed into
/// the output metadata.
#[derive(Debug, Clone, Copy, Serialize, TypedBuilder)]
pub struct SampleParams {
    pub len: i64,
    pub count: i64,
    #[builder(default)]
    pub one_based: bool,
}

impl SampleParams {
    pub fn indices(&self) -> Vec<i64> {
        equidistant_indices(self.len, self.count, self.one_based)
    }
}

/// Computes `count` evenly spaced indices across the range `[0, len - 1]`.
///
/// For `count <= 0` the result is empty; for `count == 1` it is the single
/// floor midpoint `len / 2` (floored toward negative infinity); otherwise
/// index `i` is `round(i * (len - 1) / (count - 1))` with half-to-even
/// tie breaking. Setting `one_based` shifts every returned index by +1.
///
/// The result always has exactly `max(count, 0)` elements and is
/// non-decreasing for `len >= 1`. Indices repeat when `count` exceeds
/// `len`, so callers that need distinct positions should clamp the
/// requested count first (see `sample_function::clamped_indices`).
pub fn equidistant_indices(len: i64, count: i64, one_based: bool) -> Vec<i64> {
    if count <= 0 {
        return Vec::new();
    }

    let shift = i64::from(one_based);

    if count == 1 {
        // div_euclid floors for the positive divisor, which keeps the
        // midpoint of a negative range consistent with the count >= 2 arm.
        return vec![len.div_euclid(2) + shift];
    }

    // The integer product is formed first so the division below is the
    // single rounding step; ties at exact half-integers go to even.
    let span = len - 1;
    let steps = (count - 1) as f64;
    (0..count)
        .map(|i| ((i * span) as f64 / steps).round_ties_even() as i64 + shift)
        .collect()
}
