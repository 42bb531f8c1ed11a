//! Dense travel-time histograms.

use std::collections::BTreeMap;

/// Bucket `durations` into bins of `bin_size` ms keyed by bin start
/// (`floor(t / bin_size) * bin_size`), then fill gaps with zero counts.
///
/// A `bin_size` of zero yields an empty histogram.
pub fn build_histogram(durations: &[i64], bin_size: i64) -> BTreeMap<i64, usize> {
    if bin_size <= 0 {
        return BTreeMap::new();
    }
    let mut bins = BTreeMap::new();
    for &t in durations {
        *bins.entry(t.div_euclid(bin_size) * bin_size).or_insert(0) += 1;
    }
    fill_missing_bins(&bins, bin_size)
}

/// Insert a zero count for every multiple of `bin_size` between the lowest
/// and highest key of `bins`.
///
/// ```
/// use std::collections::BTreeMap;
/// use colony_stats::fill_missing_bins;
///
/// let sparse = BTreeMap::from([(200, 1), (500, 2)]);
/// let dense = fill_missing_bins(&sparse, 100);
/// assert_eq!(dense, BTreeMap::from([(200, 1), (300, 0), (400, 0), (500, 2)]));
/// ```
pub fn fill_missing_bins(bins: &BTreeMap<i64, usize>, bin_size: i64) -> BTreeMap<i64, usize> {
    let (Some(&lo), Some(&hi)) = (bins.keys().next(), bins.keys().next_back()) else {
        return BTreeMap::new();
    };
    if bin_size <= 0 {
        return bins.clone();
    }
    let mut dense = bins.clone();
    let mut key = lo;
    while key < hi {
        dense.entry(key).or_insert(0);
        key += bin_size;
    }
    dense
}
