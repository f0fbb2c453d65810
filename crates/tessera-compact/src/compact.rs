//! Axis-aligned regions sampled on a regular lattice.

use crate::config::{EmptyIntersection, IntersectionConfig};
use crate::control::ControlBlock;
use crate::iter::{CompactIterator, Points};
use crate::lattice::Lattice;
use std::fmt;
use std::sync::Arc;
use tessera_core::{Domain, GeomError, MultiIndex, ReportExt, Vector};

/// A hyper-rectangle `[left, right]` with `grid[i]` subdivisions per axis.
///
/// The lattice has `grid[i] + 1` evenly spaced samples on axis `i`; the
/// sample at position `k` has coordinate
/// `left[i] + (right[i] - left[i]) * k / grid[i]`.
///
/// Regions built by [`new`](Self::new) and [`span`](Self::span) always
/// satisfy `left[i] <= right[i]`. A permissive
/// [`intersection`](Self::intersection) of disjoint regions may not; check
/// [`is_empty`](Self::is_empty).
///
/// Cloning produces an independent region with its own control block;
/// iterators of the original are unaffected by the clone and vice versa.
///
/// # Examples
///
/// ```
/// use tessera_compact::Compact;
/// use tessera_core::{MultiIndex, Vector};
///
/// let a = Vector::from_slice(&[1.0, 1.0]).unwrap();
/// let b = Vector::from_slice(&[0.0, 0.0]).unwrap();
/// let region = Compact::new(&a, &b, &MultiIndex::from([1, 1])).unwrap();
///
/// assert_eq!(region.left_boundary().as_slice(), &[0.0, 0.0]);
/// assert!(region.is_inside(&Vector::from_slice(&[0.5, 0.5]).unwrap()));
/// assert!(!region.is_inside(&Vector::from_slice(&[1.5, 0.0]).unwrap()));
/// assert_eq!(region.node_count(), Some(4));
/// ```
pub struct Compact {
    lattice: Arc<Lattice>,
    control: Arc<ControlBlock>,
}

impl Compact {
    /// Region spanned by two opposite corners.
    ///
    /// Inverted coordinate pairs are swapped so the stored borders are the
    /// per-axis minimum and maximum. All three arguments must share one
    /// dimension.
    pub fn new(corner1: &Vector, corner2: &Vector, grid: &MultiIndex) -> Result<Self, GeomError> {
        check_dims(corner1.dim(), corner2.dim(), grid.dim()).reported("Compact::new")?;
        let left = Vector::zip_with(corner1, corner2, f64::min).reported("Compact::new")?;
        let right = Vector::zip_with(corner1, corner2, f64::max).reported("Compact::new")?;
        Ok(Self::from_parts(left, right, grid.clone()))
    }

    /// Smallest region containing both `a` and `b`, sampled with `grid`.
    pub fn span(a: &Compact, b: &Compact, grid: &MultiIndex) -> Result<Self, GeomError> {
        check_dims(a.dim(), b.dim(), grid.dim()).reported("Compact::span")?;
        let left = Vector::zip_with(&a.lattice.left, &b.lattice.left, f64::min)
            .reported("Compact::span")?;
        let right = Vector::zip_with(&a.lattice.right, &b.lattice.right, f64::max)
            .reported("Compact::span")?;
        Ok(Self::from_parts(left, right, grid.clone()))
    }

    /// Tolerance-aware intersection of `a` and `b`, sampled with `grid`.
    ///
    /// Equivalent to [`intersection_with`](Self::intersection_with) using
    /// `tol` and permissive empty-result handling.
    pub fn intersection(
        a: &Compact,
        b: &Compact,
        grid: &MultiIndex,
        tol: f64,
    ) -> Result<Self, GeomError> {
        Self::intersection_with(a, b, grid, &IntersectionConfig::new(tol))
    }

    /// Tolerance-aware intersection of `a` and `b`, sampled with `grid`.
    ///
    /// Where one operand's left border lies past the other's right border
    /// by no more than `config.tolerance`, the two borders are treated as
    /// touching and the candidate border snaps to the other operand's
    /// border. This keeps regions that meet at a boundary from producing a
    /// spurious empty intersection through rounding. The result's left
    /// border is the per-axis maximum of the snapped left candidates and
    /// its right border the per-axis minimum of the snapped right
    /// candidates. The operation is symmetric in `a` and `b`.
    ///
    /// If the regions are genuinely disjoint on some axis the result has
    /// `left > right` there; [`EmptyIntersection::Reject`] turns that into
    /// an error instead.
    pub fn intersection_with(
        a: &Compact,
        b: &Compact,
        grid: &MultiIndex,
        config: &IntersectionConfig,
    ) -> Result<Self, GeomError> {
        config.validate().reported("Compact::intersection")?;
        check_dims(a.dim(), b.dim(), grid.dim()).reported("Compact::intersection")?;
        let tol = config.tolerance;
        let (la, ra) = (&a.lattice.left, &a.lattice.right);
        let (lb, rb) = (&b.lattice.left, &b.lattice.right);

        let left_a = Vector::zip_with(la, rb, |l, r| snap_left(l, r, tol));
        let left_b = Vector::zip_with(lb, ra, |l, r| snap_left(l, r, tol));
        let right_a = Vector::zip_with(ra, lb, |r, l| snap_right(r, l, tol));
        let right_b = Vector::zip_with(rb, la, |r, l| snap_right(r, l, tol));

        let left = Vector::zip_with(&left_a?, &left_b?, f64::max).reported("Compact::intersection")?;
        let right =
            Vector::zip_with(&right_a?, &right_b?, f64::min).reported("Compact::intersection")?;

        let region = Self::from_parts(left, right, grid.clone());
        if config.empty == EmptyIntersection::Reject {
            if let Some(axis) = region.first_inverted_axis() {
                return Err(GeomError::invalid(format!(
                    "intersection is empty on axis {axis}"
                )))
                .reported("Compact::intersection");
            }
        }
        Ok(region)
    }

    fn from_parts(left: Vector, right: Vector, grid: MultiIndex) -> Self {
        let lattice = Arc::new(Lattice { left, right, grid });
        let control = Arc::new(ControlBlock::new(&lattice));
        Self { lattice, control }
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.lattice.dim()
    }

    /// Copy of the lower border.
    pub fn left_boundary(&self) -> Vector {
        self.lattice.left.clone()
    }

    /// Copy of the upper border.
    pub fn right_boundary(&self) -> Vector {
        self.lattice.right.clone()
    }

    /// Copy of the per-axis subdivision counts.
    pub fn grid(&self) -> MultiIndex {
        self.lattice.grid.clone()
    }

    /// The control block shared with this region's iterators.
    pub fn control_block(&self) -> &Arc<ControlBlock> {
        &self.control
    }

    /// `true` iff some axis has `left > right`.
    pub fn is_empty(&self) -> bool {
        self.lattice.is_empty()
    }

    fn first_inverted_axis(&self) -> Option<usize> {
        self.lattice
            .left
            .iter()
            .zip(self.lattice.right.iter())
            .position(|(l, r)| l > r)
    }

    /// Number of lattice points, `∏(grid[i] + 1)`, or `None` on overflow.
    pub fn node_count(&self) -> Option<usize> {
        self.lattice
            .grid
            .as_slice()
            .iter()
            .try_fold(1usize, |acc, &g| g.checked_add(1).and_then(|n| acc.checked_mul(n)))
    }

    /// `true` iff `left <= point <= right` on every axis.
    ///
    /// A point of the wrong dimension is reported and treated as outside.
    #[track_caller]
    pub fn is_inside(&self, point: &Vector) -> bool {
        Domain::is_inside(self, point)
    }

    /// Write the coordinates of lattice position `index` into `out`.
    ///
    /// Fails with `DimensionMismatch` if `index` or `out` has the wrong
    /// dimension and `IndexOutOfBound` if `index` lies outside the lattice.
    pub fn vector_coords(&self, index: &MultiIndex, out: &mut Vector) -> Result<(), GeomError> {
        self.lattice
            .coords_into(index, out)
            .reported("Compact::vector_coords")
    }

    /// Coordinates of lattice position `index` as a new vector.
    pub fn vector_copy(&self, index: &MultiIndex) -> Result<Vector, GeomError> {
        let mut out = self.lattice.left.clone();
        self.vector_coords(index, &mut out)?;
        Ok(out)
    }

    /// Check that `order` is a permutation of `0..dim`.
    pub fn validate_order(&self, order: &MultiIndex) -> Result<(), GeomError> {
        if order.dim() != self.dim() {
            return Err(GeomError::DimensionMismatch {
                expected: self.dim(),
                found: order.dim(),
            });
        }
        if !order.is_permutation() {
            return Err(GeomError::invalid(format!(
                "bypass order {order} is not a permutation of 0..{}",
                self.dim()
            )));
        }
        Ok(())
    }

    /// Iterator positioned at lattice position `index`, walking in bypass
    /// `order`.
    pub fn iterator(
        &self,
        index: &MultiIndex,
        order: &MultiIndex,
    ) -> Result<CompactIterator, GeomError> {
        self.check_iterator_args(index, order)
            .reported("Compact::iterator")?;
        Ok(CompactIterator::new(
            index.clone(),
            order.clone(),
            Arc::clone(&self.control),
        ))
    }

    fn check_iterator_args(&self, index: &MultiIndex, order: &MultiIndex) -> Result<(), GeomError> {
        let dim = self.dim();
        for found in [index.dim(), order.dim()] {
            if found != dim {
                return Err(GeomError::DimensionMismatch {
                    expected: dim,
                    found,
                });
            }
        }
        if !index.is_within(&self.lattice.grid)? {
            return Err(GeomError::IndexOutOfBound);
        }
        self.validate_order(order)
    }

    /// Iterator at the all-zero position, whose coordinates are the left
    /// border.
    pub fn begin(&self, order: &MultiIndex) -> Result<CompactIterator, GeomError> {
        self.iterator(&MultiIndex::zeros(self.dim()), order)
    }

    /// Iterator at the last lattice position, whose coordinates are the
    /// right border.
    ///
    /// This is an inclusive final element, not a past-the-end sentinel:
    /// it can be read, and advancing it exhausts it.
    pub fn end(&self, order: &MultiIndex) -> Result<CompactIterator, GeomError> {
        self.iterator(&self.lattice.grid, order)
    }

    /// Standard iterator over every lattice point in bypass `order`.
    pub fn points(&self, order: &MultiIndex) -> Result<Points, GeomError> {
        Ok(self.begin(order)?.into_points())
    }

    /// Every lattice point in bypass `order`, collected.
    ///
    /// Fails with `AllocationFailure` if the point count overflows or the
    /// buffer cannot be reserved.
    pub fn lattice_points(&self, order: &MultiIndex) -> Result<Vec<Vector>, GeomError> {
        let count = self
            .node_count()
            .ok_or(GeomError::AllocationFailure {
                requested: usize::MAX,
            })
            .reported("Compact::lattice_points")?;
        let mut points = Vec::new();
        points
            .try_reserve_exact(count)
            .map_err(|_| GeomError::AllocationFailure { requested: count })
            .reported("Compact::lattice_points")?;
        for point in self.points(order)? {
            points.push(point?);
        }
        Ok(points)
    }
}

/// Left candidate `l` against the other operand's right border `r`.
fn snap_left(l: f64, r: f64, tol: f64) -> f64 {
    if l <= r || (r - l).abs() > tol {
        l
    } else {
        r
    }
}

/// Right candidate `r` against the other operand's left border `l`.
fn snap_right(r: f64, l: f64, tol: f64) -> f64 {
    if l <= r || (r - l).abs() > tol {
        r
    } else {
        l
    }
}

fn check_dims(a: usize, b: usize, grid: usize) -> Result<(), GeomError> {
    for found in [b, grid] {
        if found != a {
            return Err(GeomError::DimensionMismatch { expected: a, found });
        }
    }
    Ok(())
}

impl Domain for Compact {
    fn dim(&self) -> usize {
        self.lattice.dim()
    }

    fn contains(&self, point: &Vector) -> Result<bool, GeomError> {
        if point.dim() != self.dim() {
            return Err(GeomError::DimensionMismatch {
                expected: self.dim(),
                found: point.dim(),
            });
        }
        let lattice = &self.lattice;
        Ok(point
            .iter()
            .zip(lattice.left.iter().zip(lattice.right.iter()))
            .all(|(x, (l, r))| l <= x && x <= r))
    }
}

impl Clone for Compact {
    fn clone(&self) -> Self {
        let lattice = &self.lattice;
        Self::from_parts(
            lattice.left.clone(),
            lattice.right.clone(),
            lattice.grid.clone(),
        )
    }
}

/// Regions are equal when their borders and grids are equal.
impl PartialEq for Compact {
    fn eq(&self, other: &Self) -> bool {
        self.lattice == other.lattice
    }
}

impl fmt::Debug for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compact")
            .field("left", &self.lattice.left)
            .field("right", &self.lattice.right)
            .field("grid", &self.lattice.grid)
            .finish()
    }
}

impl Drop for Compact {
    fn drop(&mut self) {
        let orphaned = Arc::strong_count(&self.control) - 1;
        if orphaned > 0 {
            tracing::trace!(orphaned, "compact dropped with live iterators");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(data: &[f64]) -> Vector {
        Vector::from_slice(data).unwrap()
    }

    fn region(a: &[f64], b: &[f64], grid: &[usize]) -> Compact {
        Compact::new(&v(a), &v(b), &MultiIndex::from_slice(grid)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_normalizes_corners() {
        let r = region(&[1.0, 0.0, 5.0], &[0.0, 2.0, -5.0], &[1, 1, 1]);
        assert_eq!(r.left_boundary().as_slice(), &[0.0, 0.0, -5.0]);
        assert_eq!(r.right_boundary().as_slice(), &[1.0, 2.0, 5.0]);
        assert!(!r.is_empty());
    }

    #[test]
    fn new_rejects_dimension_mismatch() {
        let err = Compact::new(&v(&[0.0, 0.0]), &v(&[1.0]), &MultiIndex::from([1, 1]));
        assert_eq!(
            err.err(),
            Some(GeomError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        let err = Compact::new(&v(&[0.0, 0.0]), &v(&[1.0, 1.0]), &MultiIndex::from([1]));
        assert!(matches!(err, Err(GeomError::DimensionMismatch { .. })));
    }

    #[test]
    fn grid_is_a_copy() {
        let r = region(&[0.0], &[1.0], &[4]);
        let mut g = r.grid();
        g.set_axis(0, 100).unwrap();
        assert_eq!(r.grid(), MultiIndex::from([4]));
    }

    #[test]
    fn clone_is_independent() {
        let a = region(&[0.0, 0.0], &[1.0, 1.0], &[2, 2]);
        let b = a.clone();
        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(a.control_block(), b.control_block()));
        let it = b.begin(&MultiIndex::from([0, 1])).unwrap();
        drop(a);
        assert!(it.vector_copy().is_ok());
    }

    // ── Span ────────────────────────────────────────────────────

    #[test]
    fn span_covers_both() {
        let a = region(&[0.0, 0.0], &[1.0, 1.0], &[1, 1]);
        let b = region(&[2.0, -1.0], &[3.0, 0.5], &[1, 1]);
        let s = Compact::span(&a, &b, &MultiIndex::from([3, 2])).unwrap();
        assert_eq!(s.left_boundary().as_slice(), &[0.0, -1.0]);
        assert_eq!(s.right_boundary().as_slice(), &[3.0, 1.0]);
        assert_eq!(s.grid(), MultiIndex::from([3, 2]));
    }

    #[test]
    fn span_rejects_mismatched_grid() {
        let a = region(&[0.0, 0.0], &[1.0, 1.0], &[1, 1]);
        assert!(matches!(
            Compact::span(&a, &a, &MultiIndex::from([1, 1, 1])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    // ── Intersection ────────────────────────────────────────────

    #[test]
    fn intersection_of_overlapping_regions() {
        let a = region(&[0.0, 0.0], &[2.0, 2.0], &[1, 1]);
        let b = region(&[1.0, -1.0], &[3.0, 1.5], &[1, 1]);
        let i = Compact::intersection(&a, &b, &MultiIndex::from([2, 2]), 1e-8).unwrap();
        assert_eq!(i.left_boundary().as_slice(), &[1.0, 0.0]);
        assert_eq!(i.right_boundary().as_slice(), &[2.0, 1.5]);
    }

    #[test]
    fn intersection_snaps_boundaries_within_tolerance() {
        let a = region(&[0.0], &[1.0], &[1]);
        let b = region(&[1.0 + 1e-10], &[2.0], &[1]);
        let i = Compact::intersection(&a, &b, &MultiIndex::from([0]), 1e-8).unwrap();
        assert!(!i.is_empty());
        assert_eq!(i.left_boundary().as_slice(), &[1.0]);
        assert_eq!(i.right_boundary().as_slice(), &[1.0 + 1e-10]);
    }

    #[test]
    fn disjoint_intersection_is_permissive_by_default() {
        let a = region(&[0.0], &[1.0], &[1]);
        let b = region(&[2.0], &[3.0], &[1]);
        let i = Compact::intersection(&a, &b, &MultiIndex::from([1]), 1e-8).unwrap();
        assert!(i.is_empty());
        assert_eq!(i.left_boundary().as_slice(), &[2.0]);
        assert_eq!(i.right_boundary().as_slice(), &[1.0]);
    }

    #[test]
    fn disjoint_intersection_rejected_on_request() {
        let a = region(&[0.0, 0.0], &[1.0, 1.0], &[1, 1]);
        let b = region(&[0.5, 2.0], &[3.0, 3.0], &[1, 1]);
        let config = IntersectionConfig::default().with_empty(EmptyIntersection::Reject);
        let err = Compact::intersection_with(&a, &b, &MultiIndex::from([1, 1]), &config);
        assert_eq!(
            err.err(),
            Some(GeomError::invalid("intersection is empty on axis 1"))
        );
    }

    #[test]
    fn intersection_rejects_bad_tolerance() {
        let a = region(&[0.0], &[1.0], &[1]);
        for tol in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Compact::intersection(&a, &a, &MultiIndex::from([1]), tol),
                Err(GeomError::InvalidArgument { .. })
            ));
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn is_inside_is_closed() {
        let r = region(&[1.0, 1.0], &[0.0, 0.0], &[1, 1]);
        assert!(r.is_inside(&v(&[0.5, 0.5])));
        assert!(r.is_inside(&v(&[0.0, 1.0])));
        assert!(!r.is_inside(&v(&[1.5, 0.0])));
        assert!(!r.is_inside(&v(&[0.5])));
        assert!(matches!(
            r.contains(&v(&[0.5])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn vector_copy_maps_lattice_positions() {
        let r = region(&[0.0, 10.0], &[1.0, 20.0], &[2, 5]);
        let p = r.vector_copy(&MultiIndex::from([1, 2])).unwrap();
        assert_eq!(p.as_slice(), &[0.5, 14.0]);
        assert_eq!(
            r.vector_copy(&MultiIndex::from([3, 0])),
            Err(GeomError::IndexOutOfBound)
        );
        assert!(matches!(
            r.vector_copy(&MultiIndex::from([0])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn vector_coords_checks_output_dimension() {
        let r = region(&[0.0, 0.0], &[1.0, 1.0], &[1, 1]);
        let mut out = v(&[0.0]);
        assert!(matches!(
            r.vector_coords(&MultiIndex::from([0, 0]), &mut out),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn node_count_and_overflow() {
        assert_eq!(region(&[0.0, 0.0], &[1.0, 1.0], &[2, 3]).node_count(), Some(12));
        let huge = region(&[0.0, 0.0], &[1.0, 1.0], &[usize::MAX, 1]);
        assert_eq!(huge.node_count(), None);
        assert!(matches!(
            huge.lattice_points(&MultiIndex::from([0, 1])),
            Err(GeomError::AllocationFailure { .. })
        ));
    }

    // ── Iterator creation ───────────────────────────────────────

    #[test]
    fn begin_and_end_read_borders() {
        let r = region(&[0.1, -2.0], &[0.7, 3.3], &[3, 7]);
        let order = MultiIndex::from([1, 0]);
        let begin = r.begin(&order).unwrap().vector_copy().unwrap();
        let end = r.end(&order).unwrap().vector_copy().unwrap();
        assert_eq!(begin, r.left_boundary());
        assert_eq!(end, r.right_boundary());
    }

    #[test]
    fn invalid_orders_are_rejected() {
        let r = region(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], &[1, 1, 1]);
        for bad in [[0, 0, 1], [0, 1, 3], [2, 2, 2]] {
            assert!(matches!(
                r.begin(&MultiIndex::from(bad)),
                Err(GeomError::InvalidArgument { .. })
            ));
        }
        assert!(matches!(
            r.begin(&MultiIndex::from([0, 1])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn iterator_requires_position_in_lattice() {
        let r = region(&[0.0, 0.0], &[1.0, 1.0], &[2, 2]);
        let order = MultiIndex::from([0, 1]);
        let it = r.iterator(&MultiIndex::from([1, 2]), &order).unwrap();
        assert_eq!(it.vector_copy().unwrap().as_slice(), &[0.5, 1.0]);
        assert_eq!(
            r.iterator(&MultiIndex::from([3, 0]), &order).err(),
            Some(GeomError::IndexOutOfBound)
        );
    }

    #[test]
    fn dropping_region_invalidates_iterators() {
        let r = region(&[0.0, 0.0], &[1.0, 1.0], &[1, 1]);
        let mut it = r.begin(&MultiIndex::from([0, 1])).unwrap();
        let control = Arc::clone(r.control_block());
        assert!(control.is_source_alive());
        drop(r);
        assert!(!control.is_source_alive());
        assert_eq!(it.advance(), Err(GeomError::SourceDestroyed));
        assert!(it.is_valid());
        assert_eq!(it.vector_copy(), Err(GeomError::SourceDestroyed));
    }

    proptest! {
        #[test]
        fn corners_normalize_per_axis(
            a in prop::collection::vec(-1e3f64..1e3, 1..5),
            b_seed in prop::collection::vec(-1e3f64..1e3, 5),
        ) {
            let b: Vec<f64> = b_seed[..a.len()].to_vec();
            let grid = MultiIndex::zeros(a.len());
            let r = Compact::new(&v(&a), &v(&b), &grid).unwrap();
            for i in 0..a.len() {
                prop_assert_eq!(r.left_boundary().coord(i).unwrap(), a[i].min(b[i]));
                prop_assert_eq!(r.right_boundary().coord(i).unwrap(), a[i].max(b[i]));
            }
        }

        #[test]
        fn intersection_is_symmetric(
            a1 in prop::collection::vec(-10f64..10.0, 3),
            a2 in prop::collection::vec(-10f64..10.0, 3),
            b1 in prop::collection::vec(-10f64..10.0, 3),
            b2 in prop::collection::vec(-10f64..10.0, 3),
            tol in 1e-9f64..1.0,
        ) {
            let grid = MultiIndex::from([1, 1, 1]);
            let a = Compact::new(&v(&a1), &v(&a2), &grid).unwrap();
            let b = Compact::new(&v(&b1), &v(&b2), &grid).unwrap();
            let ab = Compact::intersection(&a, &b, &grid, tol).unwrap();
            let ba = Compact::intersection(&b, &a, &grid, tol).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn span_contains_both_operands(
            a1 in prop::collection::vec(-10f64..10.0, 2),
            a2 in prop::collection::vec(-10f64..10.0, 2),
            b1 in prop::collection::vec(-10f64..10.0, 2),
            b2 in prop::collection::vec(-10f64..10.0, 2),
        ) {
            let grid = MultiIndex::from([1, 1]);
            let a = Compact::new(&v(&a1), &v(&a2), &grid).unwrap();
            let b = Compact::new(&v(&b1), &v(&b2), &grid).unwrap();
            let s = Compact::span(&a, &b, &grid).unwrap();
            for corner in [&a1, &a2, &b1, &b2] {
                prop_assert!(s.is_inside(&v(corner)));
            }
        }
    }
}
