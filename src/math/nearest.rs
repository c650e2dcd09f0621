use std::cmp::Ordering;

use super::Point3;

/// Returns the indices of the `k` points nearest to `points[source]`,
/// closest first.
///
/// The source itself is never included. Candidates are ranked by Euclidean
/// distance; equal distances keep ascending index order. When
/// fewer than `k` other points exist, all of them are returned.
///
/// An out-of-range `source` yields an empty list.
#[must_use]
pub fn nearest_indices(points: &[Point3], source: usize, k: usize) -> Vec<usize> {
    let Some(origin) = points.get(source) else {
        return Vec::new();
    };
    if k == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != source)
        .map(|(j, p)| (j, nalgebra::distance(origin, p)))
        .collect();

    candidates.sort_by(|a, b| compare_candidates(*a, *b));
    candidates.truncate(k);
    candidates.into_iter().map(|(j, _)| j).collect()
}

/// Orders by distance, then by index for exact ties.
fn compare_candidates(a: (usize, f64), b: (usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}
