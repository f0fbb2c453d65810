//! Region geometry shared between a compact and its control block.

use smallvec::SmallVec;
use tessera_core::{GeomError, MultiIndex, Vector};

/// Borders and grid of a region.
///
/// Immutable once built. Owned through an `Arc` by the region and reached
/// through a `Weak` by the control block.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Lattice {
    pub(crate) left: Vector,
    pub(crate) right: Vector,
    pub(crate) grid: MultiIndex,
}

impl Lattice {
    pub(crate) fn dim(&self) -> usize {
        self.left.dim()
    }

    /// Write the coordinates of lattice position `index` into `out`.
    ///
    /// Position `0` maps to the left border and position `grid[i]` to the
    /// right border exactly. An axis with `grid[i] == 0` has a single
    /// sample at the left border. `out` is untouched on error.
    pub(crate) fn coords_into(&self, index: &MultiIndex, out: &mut Vector) -> Result<(), GeomError> {
        let dim = self.dim();
        if index.dim() != dim {
            return Err(GeomError::DimensionMismatch {
                expected: dim,
                found: index.dim(),
            });
        }
        if out.dim() != dim {
            return Err(GeomError::DimensionMismatch {
                expected: dim,
                found: out.dim(),
            });
        }
        if !index.is_within(&self.grid)? {
            return Err(GeomError::IndexOutOfBound);
        }

        let values: SmallVec<[f64; 4]> = index
            .as_slice()
            .iter()
            .zip(self.grid.as_slice())
            .zip(self.left.iter().zip(self.right.iter()))
            .map(|((&k, &steps), (lo, hi))| interpolate(lo, hi, k, steps))
            .collect();
        out.set_data(&values)
    }

    /// `true` iff some axis is inverted.
    pub(crate) fn is_empty(&self) -> bool {
        self.left.iter().zip(self.right.iter()).any(|(l, r)| l > r)
    }
}

fn interpolate(lo: f64, hi: f64, k: usize, steps: usize) -> f64 {
    if k == 0 {
        lo
    } else if k == steps {
        hi
    } else {
        lo + (hi - lo) * (k as f64 / steps as f64)
    }
}
