//! The control block shared by a compact and its iterators.

use crate::lattice::Lattice;
use std::sync::{Arc, Weak};
use tessera_core::{GeomError, MultiIndex, ReportExt, Vector};

/// Mediator that advances lattice positions and maps them to coordinates
/// on behalf of a [`Compact`](crate::Compact) and all of its iterators.
///
/// One block is created per region and shared through an `Arc`. It holds
/// only a `Weak` reference to the region's geometry, so it may outlive the
/// region: once the region is dropped, [`is_source_alive`](Self::is_source_alive)
/// turns `false` and every operation fails with
/// [`GeomError::SourceDestroyed`].
#[derive(Debug)]
pub struct ControlBlock {
    source: Weak<Lattice>,
}

impl ControlBlock {
    pub(crate) fn new(source: &Arc<Lattice>) -> Self {
        Self {
            source: Arc::downgrade(source),
        }
    }

    /// `false` once the owning region has been dropped. Never returns to
    /// `true`.
    pub fn is_source_alive(&self) -> bool {
        self.source.strong_count() > 0
    }

    fn source(&self) -> Result<Arc<Lattice>, GeomError> {
        self.source.upgrade().ok_or(GeomError::SourceDestroyed)
    }

    /// Step `current` to the next lattice position in bypass `order`.
    ///
    /// `order[0]` is the fastest-varying axis. Axes at their grid maximum
    /// carry back to zero and the next axis in `order` is tried; the first
    /// axis below its maximum is incremented and the walk stops there.
    ///
    /// Returns `IndexOutOfBound` when every axis carried, meaning the
    /// lattice is exhausted (`current` is then all zeros), and also when
    /// `current` lies outside the lattice.
    pub fn advance(&self, current: &mut MultiIndex, order: &MultiIndex) -> Result<(), GeomError> {
        let result = self.step(current, order);
        match result {
            Err(GeomError::IndexOutOfBound) => {
                tracing::trace!("lattice exhausted");
                result
            }
            _ => result.reported("ControlBlock::advance"),
        }
    }

    fn step(&self, current: &mut MultiIndex, order: &MultiIndex) -> Result<(), GeomError> {
        let lattice = self.source()?;
        let dim = lattice.dim();
        for found in [current.dim(), order.dim()] {
            if found != dim {
                return Err(GeomError::DimensionMismatch {
                    expected: dim,
                    found,
                });
            }
        }

        for &axis in order.as_slice() {
            let cur = current.axis(axis)?;
            let max = lattice.grid.axis(axis)?;
            if cur == max {
                current.set_axis(axis, 0)?;
                continue;
            }
            if cur > max {
                return Err(GeomError::IndexOutOfBound);
            }
            current.inc_axis(axis, 1)?;
            return Ok(());
        }
        Err(GeomError::IndexOutOfBound)
    }

    /// Write the coordinates of lattice position `current` into `out`.
    pub fn map_to_coordinates(&self, current: &MultiIndex, out: &mut Vector) -> Result<(), GeomError> {
        self.source()
            .and_then(|lattice| lattice.coords_into(current, out))
            .reported("ControlBlock::map_to_coordinates")
    }
}
