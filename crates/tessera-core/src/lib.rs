//! Core types for the Tessera lattice library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate [`Vector`], the axis [`MultiIndex`], the [`GeomError`] type
//! shared by every operation, diagnostic reporting, and the [`Domain`]
//! membership trait that regions implement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod diag;
pub mod domain;
pub mod error;
pub mod index;
pub mod vector;

pub use diag::{report, ReportExt, Severity};
pub use domain::Domain;
pub use error::GeomError;
pub use index::MultiIndex;
pub use vector::{Norm, Vector};
