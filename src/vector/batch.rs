// ============================================================================
// Batch Vector Algorithms
// Cubic Bezier sampling and k-means cluster centers
// ============================================================================

use super::DecimalVector;
use crate::numeric::{Decimal, NumericError, NumericResult};

impl DecimalVector {
    /// Sample a cubic Bezier curve at `sample_count` evenly spaced parameter
    /// values and append the points to `out_points`.
    ///
    /// The curve is stepped by forward differencing: with `q = 1 / (n - 1)`
    /// the first, second and third differences of the cubic are set up once
    /// and each step costs three vector additions. The first point appended
    /// is always `control_points[0]`.
    ///
    /// Returns the length of the polyline through the samples.
    ///
    /// # Errors
    /// `InvalidInput` when `sample_count < 2`; nothing is appended.
    ///
    /// # Example
    /// ```
    /// use decimal_number::numeric::Decimal;
    /// use decimal_number::vector::DecimalVector;
    ///
    /// let control = [
    ///     DecimalVector::new(0, 0, 0),
    ///     DecimalVector::new(0, 10, 0),
    ///     DecimalVector::new(10, 10, 0),
    ///     DecimalVector::new(10, 0, 0),
    /// ];
    /// let mut points = Vec::new();
    /// let length = DecimalVector::evaluate_bezier(&control, 5, &mut points).unwrap();
    /// assert_eq!(points.len(), 5);
    /// assert_eq!(points[4], DecimalVector::new(10, 0, 0));
    /// assert!(length > Decimal::ZERO);
    /// ```
    pub fn evaluate_bezier(
        control_points: &[DecimalVector; 4],
        sample_count: usize,
        out_points: &mut Vec<DecimalVector>,
    ) -> NumericResult<Decimal> {
        if sample_count < 2 {
            tracing::warn!(sample_count, "Bezier evaluation needs at least two samples");
            return Err(NumericError::InvalidInput);
        }

        let [p0, p1, p2, p3] = *control_points;
        let q = Decimal::ONE / (sample_count - 1);
        let q2 = q * q;
        let q3 = q2 * q;

        // Polynomial coefficients: a + b·t + c·t² + d·t³
        let b = (p1 - p0) * 3;
        let c = (p2 - p1 * 2 + p0) * 3;
        let d = p3 - p2 * 3 + p1 * 3 - p0;

        let mut point = p0;
        let mut first = b * q + c * q2 + d * q3;
        let mut second = c * (q2 * 2) + d * (q3 * 6);
        let third = d * (q3 * 6);

        out_points.reserve(sample_count);
        out_points.push(point);

        let mut length = Decimal::ZERO;
        for _ in 1..sample_count {
            let previous = point;
            point += first;
            first += second;
            second += third;

            length += Self::dist(&point, &previous);
            out_points.push(point);
        }

        Ok(length)
    }

    /// Refine `clusters` with Lloyd's k-means over `points`.
    ///
    /// Each of the `iterations` passes assigns every point to its nearest
    /// center by squared distance (ties go to the lowest index, points with
    /// a non-finite distance to every center are skipped) and moves each
    /// center to the mean of its members. A center with no members keeps its
    /// position. After the last pass every center whose membership is below
    /// `min_membership` is removed, preserving the order of the rest.
    ///
    /// Does nothing when either `points` or `clusters` is empty.
    pub fn generate_cluster_centers(
        clusters: &mut Vec<DecimalVector>,
        points: &[DecimalVector],
        iterations: usize,
        min_membership: usize,
    ) {
        if points.is_empty() || clusters.is_empty() {
            return;
        }

        let mut membership = vec![0usize; clusters.len()];
        for _ in 0..iterations {
            let mut sums = vec![DecimalVector::ZERO; clusters.len()];
            membership.fill(0);

            for point in points {
                if let Some(nearest) = nearest_center(clusters, point) {
                    sums[nearest] += *point;
                    membership[nearest] += 1;
                }
            }

            for ((center, sum), &count) in clusters.iter_mut().zip(&sums).zip(&membership) {
                if count > 0 {
                    *center = *sum / count;
                }
            }
        }

        let before = clusters.len();
        let mut counts = membership.iter();
        clusters.retain(|_| counts.next().is_some_and(|&count| count >= min_membership));

        let removed = before - clusters.len();
        if removed > 0 {
            tracing::debug!(
                removed,
                remaining = clusters.len(),
                min_membership,
                "pruned under-populated cluster centers"
            );
        }
    }
}

/// Index of the center closest to `point`; the first one wins ties.
fn nearest_center(centers: &[DecimalVector], point: &DecimalVector) -> Option<usize> {
    let mut best: Option<(usize, Decimal)> = None;
    for (index, center) in centers.iter().enumerate() {
        let dist = DecimalVector::dist_squared(point, center);
        if !dist.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
}
