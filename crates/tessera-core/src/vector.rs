//! Fixed-dimension real coordinate vectors.

use crate::error::GeomError;
use smallvec::SmallVec;
use std::fmt;

/// Norm used for vector magnitudes and distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Norm {
    /// Sum of absolute coordinates (L1).
    First,
    /// Euclidean length (L2).
    Second,
    /// Largest absolute coordinate (L-infinity).
    Chebyshev,
}

/// A point or displacement in `dim`-dimensional real space.
///
/// Uses `SmallVec<[f64; 4]>` so vectors of up to four dimensions stay
/// inline; higher dimensions spill to the heap transparently.
///
/// Every constructed vector has at least one coordinate and all of its
/// coordinates are finite. Mutating operations are all-or-nothing: if any
/// resulting coordinate would be NaN or infinite the vector is left
/// untouched and the error returned.
///
/// # Examples
///
/// ```
/// use tessera_core::{Norm, Vector};
///
/// let a = Vector::from_slice(&[3.0, 4.0]).unwrap();
/// assert_eq!(a.dim(), 2);
/// assert_eq!(a.norm(Norm::Second), 5.0);
///
/// let b = Vector::from_slice(&[1.0, 1.0]).unwrap();
/// let sum = Vector::add(&a, &b).unwrap();
/// assert_eq!(sum.as_slice(), &[4.0, 5.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coords: SmallVec<[f64; 4]>,
}

impl Vector {
    /// Create a vector of dimension `dim` from the first `dim` values of
    /// `data`.
    ///
    /// Fails with `DimensionMismatch` if `dim == 0` or `data` is shorter
    /// than `dim`, `NullArgument` if `data` is absent, and `NotANumber` /
    /// `InfinityOverflow` if any coordinate is not finite.
    pub fn create(dim: usize, data: Option<&[f64]>) -> Result<Self, GeomError> {
        if dim == 0 {
            return Err(GeomError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }
        let data = data.ok_or(GeomError::NullArgument { what: "data" })?;
        if data.len() < dim {
            return Err(GeomError::DimensionMismatch {
                expected: dim,
                found: data.len(),
            });
        }
        let data = &data[..dim];
        check_finite(data.iter().copied())?;
        Ok(Self {
            coords: SmallVec::from_slice(data),
        })
    }

    /// Create a vector whose dimension is the length of `data`.
    pub fn from_slice(data: &[f64]) -> Result<Self, GeomError> {
        Self::create(data.len(), Some(data))
    }

    /// A vector of `dim` zeros. Fails only if `dim == 0`.
    pub fn zeros(dim: usize) -> Result<Self, GeomError> {
        if dim == 0 {
            return Err(GeomError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }
        Ok(Self {
            coords: SmallVec::from_elem(0.0, dim),
        })
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }

    /// Coordinate on axis `index`.
    pub fn coord(&self, index: usize) -> Result<f64, GeomError> {
        self.coords
            .get(index)
            .copied()
            .ok_or(GeomError::IndexOutOfBound)
    }

    /// Overwrite the coordinate on axis `index`.
    pub fn set_coord(&mut self, index: usize, value: f64) -> Result<(), GeomError> {
        if let Some(err) = GeomError::from_non_finite(value) {
            return Err(err);
        }
        let slot = self
            .coords
            .get_mut(index)
            .ok_or(GeomError::IndexOutOfBound)?;
        *slot = value;
        Ok(())
    }

    /// Overwrite every coordinate. `data` must have exactly `dim` values.
    pub fn set_data(&mut self, data: &[f64]) -> Result<(), GeomError> {
        if data.len() != self.dim() {
            return Err(GeomError::DimensionMismatch {
                expected: self.dim(),
                found: data.len(),
            });
        }
        check_finite(data.iter().copied())?;
        self.coords.copy_from_slice(data);
        Ok(())
    }

    /// Multiply every coordinate by `multiplier`.
    pub fn scale(&mut self, multiplier: f64) -> Result<(), GeomError> {
        self.apply(|x| x * multiplier)
    }

    /// Replace every coordinate `x` with `f(x)`.
    pub fn apply(&mut self, f: impl Fn(f64) -> f64) -> Result<(), GeomError> {
        check_finite(self.coords.iter().map(|&x| f(x)))?;
        for x in &mut self.coords {
            *x = f(*x);
        }
        Ok(())
    }

    /// Add `other` in place.
    pub fn inc(&mut self, other: &Vector) -> Result<(), GeomError> {
        self.add_scaled(other, 1.0)
    }

    /// Subtract `other` in place.
    pub fn dec(&mut self, other: &Vector) -> Result<(), GeomError> {
        self.add_scaled(other, -1.0)
    }

    fn add_scaled(&mut self, other: &Vector, multiplier: f64) -> Result<(), GeomError> {
        check_same_dim(self, other)?;
        check_finite(
            self.iter()
                .zip(other.iter())
                .map(|(x, y)| x + multiplier * y),
        )?;
        for (x, y) in self.coords.iter_mut().zip(other.iter()) {
            *x += multiplier * y;
        }
        Ok(())
    }

    /// Elementwise sum as a new vector.
    pub fn add(a: &Vector, b: &Vector) -> Result<Vector, GeomError> {
        Self::zip_with(a, b, |x, y| x + y)
    }

    /// Elementwise difference `a - b` as a new vector.
    pub fn sub(a: &Vector, b: &Vector) -> Result<Vector, GeomError> {
        Self::zip_with(a, b, |x, y| x - y)
    }

    /// Build a new vector from `f(a[i], b[i])`.
    pub fn zip_with(
        a: &Vector,
        b: &Vector,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector, GeomError> {
        check_same_dim(a, b)?;
        let coords: SmallVec<[f64; 4]> = a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect();
        check_finite(coords.iter().copied())?;
        Ok(Vector { coords })
    }

    /// Dot product.
    pub fn dot(a: &Vector, b: &Vector) -> Result<f64, GeomError> {
        check_same_dim(a, b)?;
        let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        match GeomError::from_non_finite(dot) {
            Some(err) => Err(err),
            None => Ok(dot),
        }
    }

    /// Magnitude under the given norm.
    pub fn norm(&self, norm: Norm) -> f64 {
        norm_of(self.iter(), norm)
    }

    /// Distance between `a` and `b` under the given norm.
    pub fn distance(a: &Vector, b: &Vector, norm: Norm) -> Result<f64, GeomError> {
        check_same_dim(a, b)?;
        Ok(norm_of(a.iter().zip(b.iter()).map(|(x, y)| x - y), norm))
    }

    /// `true` iff `a` and `b` have the same dimension and lie within `tol`
    /// of each other under `norm`.
    pub fn equals(a: &Vector, b: &Vector, norm: Norm, tol: f64) -> bool {
        match Self::distance(a, b, norm) {
            Ok(d) => d <= tol,
            Err(_) => false,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

fn norm_of(values: impl Iterator<Item = f64>, norm: Norm) -> f64 {
    match norm {
        Norm::First => values.map(f64::abs).sum(),
        Norm::Second => values.map(|x| x * x).sum::<f64>().sqrt(),
        Norm::Chebyshev => values.map(f64::abs).fold(0.0, f64::max),
    }
}

fn check_same_dim(a: &Vector, b: &Vector) -> Result<(), GeomError> {
    if a.dim() != b.dim() {
        return Err(GeomError::DimensionMismatch {
            expected: a.dim(),
            found: b.dim(),
        });
    }
    Ok(())
}

fn check_finite(mut values: impl Iterator<Item = f64>) -> Result<(), GeomError> {
    match values.find_map(GeomError::from_non_finite) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(data: &[f64]) -> Vector {
        Vector::from_slice(data).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn create_copies_prefix() {
        let vec = Vector::create(2, Some(&[1.0, 2.0, 3.0][..])).unwrap();
        assert_eq!(vec.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn create_rejects_bad_input() {
        assert!(matches!(
            Vector::create(0, Some(&[1.0][..])),
            Err(GeomError::DimensionMismatch { .. })
        ));
        assert_eq!(
            Vector::create(2, None),
            Err(GeomError::NullArgument { what: "data" })
        );
        assert_eq!(
            Vector::create(3, Some(&[1.0, 2.0][..])),
            Err(GeomError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Vector::from_slice(&[1.0, f64::NAN]),
            Err(GeomError::NotANumber)
        );
        assert_eq!(
            Vector::from_slice(&[f64::INFINITY]),
            Err(GeomError::InfinityOverflow)
        );
    }

    #[test]
    fn high_dimension_spills_to_heap() {
        let data: Vec<f64> = (0..9).map(f64::from).collect();
        let vec = v(&data);
        assert_eq!(vec.dim(), 9);
        assert_eq!(vec.coord(8), Ok(8.0));
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn coord_access_is_bounds_checked() {
        let mut vec = v(&[1.0, 2.0]);
        assert_eq!(vec.coord(2), Err(GeomError::IndexOutOfBound));
        assert_eq!(vec.set_coord(2, 0.0), Err(GeomError::IndexOutOfBound));
        vec.set_coord(1, 5.0).unwrap();
        assert_eq!(vec.as_slice(), &[1.0, 5.0]);
    }

    #[test]
    fn set_coord_rejects_non_finite() {
        let mut vec = v(&[1.0]);
        assert_eq!(vec.set_coord(0, f64::NAN), Err(GeomError::NotANumber));
        assert_eq!(
            vec.set_coord(0, f64::NEG_INFINITY),
            Err(GeomError::InfinityOverflow)
        );
        assert_eq!(vec.as_slice(), &[1.0]);
    }

    #[test]
    fn set_data_requires_matching_length() {
        let mut vec = v(&[1.0, 2.0]);
        assert!(matches!(
            vec.set_data(&[1.0]),
            Err(GeomError::DimensionMismatch { .. })
        ));
        vec.set_data(&[7.0, 8.0]).unwrap();
        assert_eq!(vec.as_slice(), &[7.0, 8.0]);
    }

    // ── Arithmetic ──────────────────────────────────────────────

    #[test]
    fn scale_is_all_or_nothing() {
        let mut vec = v(&[1.0, f64::MAX]);
        assert_eq!(vec.scale(10.0), Err(GeomError::InfinityOverflow));
        assert_eq!(vec.as_slice(), &[1.0, f64::MAX]);
        assert_eq!(vec.scale(f64::NAN), Err(GeomError::NotANumber));
        vec.scale(0.5).unwrap();
        assert_eq!(vec.coord(0), Ok(0.5));
    }

    #[test]
    fn inc_and_dec() {
        let mut a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 1.0]);
        a.inc(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 1.0]);
        a.dec(&b).unwrap();
        a.dec(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, -1.0]);
        assert!(matches!(
            a.inc(&v(&[1.0])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn sub_and_dot() {
        let a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 1.0]);
        assert_eq!(Vector::sub(&a, &b).unwrap().as_slice(), &[1.0, -1.0]);
        assert_eq!(Vector::dot(&a, &b), Ok(0.0));
        assert_eq!(Vector::dot(&a, &a), Ok(1.0));
        assert!(Vector::add(&a, &v(&[1.0, 2.0, 3.0])).is_err());
    }

    #[test]
    fn add_overflow_is_rejected() {
        let a = v(&[f64::MAX]);
        assert_eq!(Vector::add(&a, &a), Err(GeomError::InfinityOverflow));
    }

    // ── Norms ───────────────────────────────────────────────────

    #[test]
    fn norms() {
        let d = Vector::sub(&v(&[1.0, 0.0]), &v(&[0.0, 1.0])).unwrap();
        assert_eq!(d.norm(Norm::First), 2.0);
        assert!((d.norm(Norm::Second) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(d.norm(Norm::Chebyshev), 1.0);
    }

    #[test]
    fn equals_within_tolerance() {
        let a = v(&[1.0, 0.0]);
        let b = v(&[0.0, 1.0]);
        assert!(!Vector::equals(&a, &b, Norm::Second, 1.0));
        assert!(Vector::equals(&a, &a, Norm::Second, 1.0));
        assert!(Vector::equals(&a, &b, Norm::Chebyshev, 1.0));
        assert!(!Vector::equals(&a, &v(&[1.0]), Norm::First, 10.0));
    }

    #[test]
    fn display() {
        assert_eq!(v(&[1.0, 2.5]).to_string(), "(1, 2.5)");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            a in prop::collection::vec(-1e6f64..1e6, 1..6),
            shift in -1e6f64..1e6,
        ) {
            let b: Vec<f64> = a.iter().map(|x| x + shift).collect();
            let va = Vector::from_slice(&a).unwrap();
            let vb = Vector::from_slice(&b).unwrap();
            for norm in [Norm::First, Norm::Second, Norm::Chebyshev] {
                let ab = Vector::distance(&va, &vb, norm).unwrap();
                let ba = Vector::distance(&vb, &va, norm).unwrap();
                prop_assert_eq!(ab, ba);
                prop_assert!(ab >= 0.0);
            }
        }
    }
}
