//! Tessera: axis-aligned compact regions sampled on regular lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // The unit square, two subdivisions per axis.
//! let a = Vector::from_slice(&[0.0, 0.0])?;
//! let b = Vector::from_slice(&[1.0, 1.0])?;
//! let square = Compact::new(&a, &b, &MultiIndex::from([2, 2]))?;
//!
//! // Walk the lattice row by row.
//! let points = square.lattice_points(&MultiIndex::from([0, 1]))?;
//! assert_eq!(points.len(), 9);
//! assert_eq!(points[1].as_slice(), &[0.5, 0.0]);
//!
//! // Regions that touch within tolerance share a face.
//! let c = Vector::from_slice(&[1.0, 0.0])?;
//! let d = Vector::from_slice(&[2.0, 1.0])?;
//! let neighbour = Compact::new(&c, &d, &MultiIndex::from([1, 1]))?;
//! let face = Compact::intersection(&square, &neighbour, &MultiIndex::from([0, 4]), 1e-8)?;
//! assert_eq!(face.left_boundary().as_slice(), &[1.0, 0.0]);
//! # Ok::<(), GeomError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geom`] | `tessera-core` | Vectors, multi-indices, errors, diagnostics |
//! | [`compact`] | `tessera-compact` | Regions, control blocks, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vectors, multi-indices, errors, and diagnostics (`tessera-core`).
///
/// Contains [`geom::Vector`], [`geom::MultiIndex`], the
/// [`geom::GeomError`] type, and the [`geom::Domain`] trait.
pub use tessera_core as geom;

/// Compact regions and lattice iteration (`tessera-compact`).
///
/// [`compact::Compact`] builds regions; [`compact::CompactIterator`] walks
/// them.
pub use tessera_compact as compact;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{Domain, MultiIndex, Norm, Vector};

    // Errors and diagnostics
    pub use tessera_core::{GeomError, ReportExt, Severity};

    // Regions
    pub use tessera_compact::{
        Compact, CompactIterator, EmptyIntersection, IntersectionConfig, Points,
    };
}
