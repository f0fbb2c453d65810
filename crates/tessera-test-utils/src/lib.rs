//! Test fixtures and lattice walkers for Tessera development.
//!
//! Shorthand constructors ([`vector`], [`index`], [`unit_square`],
//! [`box_region`]) panic on bad input so tests stay terse. The walkers
//! ([`walk_indices`], [`walk_points`]) drive a [`CompactIterator`] to
//! exhaustion and check that no lattice position is visited twice.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexSet;
use tessera_compact::{Compact, CompactIterator};
use tessera_core::{GeomError, MultiIndex, Vector};

pub fn vector(data: &[f64]) -> Vector {
    Vector::from_slice(data).expect("fixture vector must be finite and non-empty")
}

pub fn index(data: &[usize]) -> MultiIndex {
    MultiIndex::from_slice(data)
}

/// `[0, 1]²` with the given subdivisions.
pub fn unit_square(grid: [usize; 2]) -> Compact {
    box_region(&[0.0, 0.0], &[1.0, 1.0], &grid)
}

/// Region spanned by two corners in any orientation.
pub fn box_region(a: &[f64], b: &[f64], grid: &[usize]) -> Compact {
    Compact::new(&vector(a), &vector(b), &index(grid)).expect("fixture region must be valid")
}

/// Every position `it` visits, in visit order, including its start.
///
/// Stops at the end of the lattice. Other advance errors are returned.
///
/// # Panics
///
/// If a position is visited twice.
pub fn walk_indices(mut it: CompactIterator) -> Result<IndexSet<MultiIndex>, GeomError> {
    let mut seen = IndexSet::new();
    while let Some(current) = it.index() {
        let fresh = seen.insert(current.clone());
        assert!(fresh, "lattice position {current} visited twice");
        match it.advance() {
            Ok(()) => {}
            Err(GeomError::IndexOutOfBound) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(seen)
}

/// Coordinates of every position `it` visits, in visit order.
pub fn walk_points(mut it: CompactIterator) -> Result<Vec<Vector>, GeomError> {
    let mut seen = IndexSet::new();
    let mut points = Vec::new();
    while let Some(current) = it.index() {
        let fresh = seen.insert(current.clone());
        assert!(fresh, "lattice position {current} visited twice");
        points.push(it.vector_copy()?);
        match it.advance() {
            Ok(()) => {}
            Err(GeomError::IndexOutOfBound) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(points)
}
