//! Compact regions for Tessera.
//!
//! A [`Compact`] is an axis-aligned hyper-rectangle sampled on a regular
//! lattice. It owns its borders and per-axis subdivision counts, derives
//! new regions ([`Compact::span`], [`Compact::intersection`]), and hands
//! out [`CompactIterator`]s that walk the lattice in a caller-chosen axis
//! order.
//!
//! # Lifetime safety
//!
//! Iterators do not borrow their region. Each region shares one
//! [`ControlBlock`] with every iterator it creates; the block holds only a
//! weak reference to the region's geometry. Once the region is dropped,
//! every outstanding iterator fails with
//! [`GeomError::SourceDestroyed`](tessera_core::GeomError::SourceDestroyed)
//! instead of reading freed state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compact;
pub mod config;
pub mod control;
pub mod iter;
mod lattice;

pub use compact::Compact;
pub use config::{EmptyIntersection, IntersectionConfig};
pub use control::ControlBlock;
pub use iter::{CompactIterator, Points};
