//! Fixed-dimension unsigned axis indices.

use crate::error::GeomError;
use smallvec::SmallVec;
use std::fmt;

/// A tuple of unsigned integers, one per axis.
///
/// Serves three roles: a lattice position, a per-axis grid resolution
/// (subdivision count), and a bypass order (a permutation of axis numbers
/// giving iteration priority).
///
/// Every accessor is bounds-checked and returns
/// [`GeomError::DimensionMismatch`] for an axis `>= dim`. Values are not
/// otherwise validated; [`inc_axis`](Self::inc_axis) wraps on underflow.
///
/// # Examples
///
/// ```
/// use tessera_core::MultiIndex;
///
/// let mut idx = MultiIndex::from_slice(&[0, 3]);
/// idx.inc_axis(0, 2).unwrap();
/// assert_eq!(idx.as_slice(), &[2, 3]);
/// assert!(idx.axis(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiIndex {
    data: SmallVec<[usize; 4]>,
}

impl MultiIndex {
    /// Copy the first `dim` values of `values` into a new index.
    ///
    /// Fails with `NullArgument` if `values` is absent and with
    /// `DimensionMismatch` if it holds fewer than `dim` values.
    pub fn create(dim: usize, values: Option<&[usize]>) -> Result<Self, GeomError> {
        let values = values.ok_or(GeomError::NullArgument { what: "values" })?;
        if values.len() < dim {
            return Err(GeomError::DimensionMismatch {
                expected: dim,
                found: values.len(),
            });
        }
        Ok(Self::from_slice(&values[..dim]))
    }

    /// Index with the same length and values as `values`.
    pub fn from_slice(values: &[usize]) -> Self {
        Self {
            data: SmallVec::from_slice(values),
        }
    }

    /// The all-zero index of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: SmallVec::from_elem(0, dim),
        }
    }

    /// The identity permutation `0, 1, .., dim-1`.
    pub fn identity(dim: usize) -> Self {
        Self {
            data: (0..dim).collect(),
        }
    }

    /// Number of axes.
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Values as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    /// Value on `axis`.
    pub fn axis(&self, axis: usize) -> Result<usize, GeomError> {
        self.data
            .get(axis)
            .copied()
            .ok_or_else(|| self.axis_error(axis))
    }

    /// Overwrite the value on `axis`.
    pub fn set_axis(&mut self, axis: usize, value: usize) -> Result<(), GeomError> {
        let err = self.axis_error(axis);
        let slot = self.data.get_mut(axis).ok_or(err)?;
        *slot = value;
        Ok(())
    }

    /// Add a signed `delta` to the value on `axis`, wrapping on overflow.
    pub fn inc_axis(&mut self, axis: usize, delta: isize) -> Result<(), GeomError> {
        let err = self.axis_error(axis);
        let slot = self.data.get_mut(axis).ok_or(err)?;
        *slot = slot.wrapping_add_signed(delta);
        Ok(())
    }

    /// Overwrite every value. `values` must have exactly `dim` entries.
    pub fn set_data(&mut self, values: &[usize]) -> Result<(), GeomError> {
        if values.len() != self.dim() {
            return Err(GeomError::DimensionMismatch {
                expected: self.dim(),
                found: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// `true` iff every value is `<=` the matching value of `bound`.
    pub fn is_within(&self, bound: &MultiIndex) -> Result<bool, GeomError> {
        if self.dim() != bound.dim() {
            return Err(GeomError::DimensionMismatch {
                expected: bound.dim(),
                found: self.dim(),
            });
        }
        Ok(self.data.iter().zip(bound.data.iter()).all(|(v, b)| v <= b))
    }

    /// `true` iff the values are a permutation of `0..dim`.
    pub fn is_permutation(&self) -> bool {
        let dim = self.dim();
        let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, dim);
        for &v in &self.data {
            match seen.get_mut(v) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    fn axis_error(&self, axis: usize) -> GeomError {
        GeomError::DimensionMismatch {
            expected: self.dim(),
            found: axis,
        }
    }
}

impl From<&[usize]> for MultiIndex {
    fn from(values: &[usize]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[usize; N]> for MultiIndex {
    fn from(values: [usize; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}
