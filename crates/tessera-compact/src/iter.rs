//! Lattice cursors and the point iterator built on them.

use crate::control::ControlBlock;
use std::sync::Arc;
use tessera_core::{GeomError, MultiIndex, ReportExt, Vector};

/// Position and bypass order of a live cursor.
#[derive(Clone, Debug)]
struct Cursor {
    current: MultiIndex,
    order: MultiIndex,
}

/// A cursor over the lattice of a [`Compact`](crate::Compact).
///
/// An iterator is either *positioned* (it has a current lattice position
/// and a bypass order) or *exhausted*. Advancing past the last position in
/// bypass order moves it to exhausted, which is terminal.
///
/// All coordinate work goes through the region's shared
/// [`ControlBlock`], so the iterator keeps working for exactly as long as
/// the region is alive and fails with [`GeomError::SourceDestroyed`]
/// afterwards.
///
/// This is a manual cursor; [`into_points`](Self::into_points) adapts it to
/// a standard [`Iterator`].
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
/// let mut it = region.begin(&MultiIndex::from([0, 1])).unwrap();
/// assert_eq!(it.vector_copy().unwrap().as_slice(), &[0.0, 0.0]);
/// it.advance().unwrap();
/// assert_eq!(it.vector_copy().unwrap().as_slice(), &[1.0, 0.0]);
/// ```
#[derive(Debug)]
pub struct CompactIterator {
    cursor: Option<Cursor>,
    control: Arc<ControlBlock>,
}

impl CompactIterator {
    pub(crate) fn new(current: MultiIndex, order: MultiIndex, control: Arc<ControlBlock>) -> Self {
        Self {
            cursor: Some(Cursor { current, order }),
            control,
        }
    }

    /// `true` while positioned; `false` once exhausted.
    pub fn is_valid(&self) -> bool {
        self.cursor.is_some()
    }

    /// Current lattice position, if positioned.
    pub fn index(&self) -> Option<&MultiIndex> {
        self.cursor.as_ref().map(|c| &c.current)
    }

    /// Bypass order, if positioned.
    pub fn order(&self) -> Option<&MultiIndex> {
        self.cursor.as_ref().map(|c| &c.order)
    }

    /// The control block shared with the source region.
    pub fn control_block(&self) -> &Arc<ControlBlock> {
        &self.control
    }

    /// `true` iff both iterators were created from the same region.
    pub fn same_source(&self, other: &CompactIterator) -> bool {
        Arc::ptr_eq(&self.control, &other.control)
    }

    /// Move to the next lattice position in bypass order.
    ///
    /// `Err(IndexOutOfBound)` signals the end of the lattice: the iterator
    /// is now exhausted. Calling `advance` on an exhausted iterator returns
    /// `IndexOutOfBound` again and changes nothing. Any other error leaves
    /// the iterator where it was.
    pub fn advance(&mut self) -> Result<(), GeomError> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Err(GeomError::IndexOutOfBound);
        };
        let result = self.control.advance(&mut cursor.current, &cursor.order);
        if result == Err(GeomError::IndexOutOfBound) {
            self.cursor = None;
        }
        result
    }

    /// Independent copy of a positioned iterator sharing the same control
    /// block. Fails with `IndexOutOfBound` when exhausted.
    pub fn try_clone(&self) -> Result<CompactIterator, GeomError> {
        let cursor = self
            .cursor
            .clone()
            .ok_or(GeomError::IndexOutOfBound)
            .reported("CompactIterator::try_clone")?;
        Ok(Self {
            cursor: Some(cursor),
            control: Arc::clone(&self.control),
        })
    }

    /// A copy of this iterator advanced by one position.
    ///
    /// `self` is unchanged. Fails if this iterator is exhausted or already
    /// at the last position.
    pub fn successor(&self) -> Result<CompactIterator, GeomError> {
        let mut next = self.try_clone()?;
        next.advance().reported("CompactIterator::successor")?;
        Ok(next)
    }

    /// Coordinates of the current position as a new vector.
    pub fn vector_copy(&self) -> Result<Vector, GeomError> {
        let cursor = self.positioned()?;
        let mut out = Vector::zeros(cursor.current.dim())?;
        self.control.map_to_coordinates(&cursor.current, &mut out)?;
        Ok(out)
    }

    /// Write the coordinates of the current position into `out`.
    pub fn vector_coords(&self, out: &mut Vector) -> Result<(), GeomError> {
        let cursor = self.positioned()?;
        self.control.map_to_coordinates(&cursor.current, out)
    }

    /// Adapt into a standard iterator over the remaining lattice points.
    pub fn into_points(self) -> Points {
        Points {
            inner: self,
            pending_advance: false,
        }
    }

    fn positioned(&self) -> Result<&Cursor, GeomError> {
        self.cursor
            .as_ref()
            .ok_or(GeomError::IndexOutOfBound)
            .reported("CompactIterator::vector_coords")
    }
}

/// Standard iterator over lattice points, starting at the cursor's current
/// position.
///
/// Yields `Ok(point)` for each remaining position in bypass order and then
/// `None`. If the source region is dropped mid-walk it yields a single
/// `Err(SourceDestroyed)` and then `None`.
#[derive(Debug)]
pub struct Points {
    inner: CompactIterator,
    pending_advance: bool,
}

impl Points {
    fn halt(&mut self, err: GeomError) -> Option<Result<Vector, GeomError>> {
        self.inner.cursor = None;
        Some(Err(err))
    }
}

impl Iterator for Points {
    type Item = Result<Vector, GeomError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_advance {
            match self.inner.advance() {
                Ok(()) => {}
                Err(GeomError::IndexOutOfBound) => return None,
                Err(err) => return self.halt(err),
            }
        }
        if !self.inner.is_valid() {
            return None;
        }
        self.pending_advance = true;
        match self.inner.vector_copy() {
            Ok(point) => Some(Ok(point)),
            Err(err) => self.halt(err),
        }
    }
}

impl std::iter::FusedIterator for Points {}
