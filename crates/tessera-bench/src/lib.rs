//! Benchmark profiles for Tessera lattice regions.
//!
//! - [`reference_region`]: 3D box with 32 subdivisions per axis (~36K nodes)
//! - [`stress_region`]: 4D box with 24 subdivisions per axis (~390K nodes)
//! - [`scatter_regions`]: deterministic overlapping boxes via seed
//! - [`probe_points`]: deterministic membership probes via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_compact::Compact;
use tessera_core::{GeomError, MultiIndex, Vector};

/// `[-1, 1]³` with 32 subdivisions per axis.
pub fn reference_region() -> Result<Compact, GeomError> {
    cube(3, 32)
}

/// `[-1, 1]⁴` with 24 subdivisions per axis.
pub fn stress_region() -> Result<Compact, GeomError> {
    cube(4, 24)
}

fn cube(dim: usize, steps: usize) -> Result<Compact, GeomError> {
    let lo = Vector::from_slice(&vec![-1.0; dim])?;
    let hi = Vector::from_slice(&vec![1.0; dim])?;
    Compact::new(&lo, &hi, &MultiIndex::from_slice(&vec![steps; dim]))
}

/// Deterministic stream of values in `[0, 1)`.
///
/// A linear-congruential mix of the seed; good enough to spread boxes and
/// probes, not a statistical RNG.
fn unit_stream(seed: u64) -> impl Iterator<Item = f64> {
    (0u64..).map(move |i| {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407));
        (h >> 11) as f64 / (1u64 << 53) as f64
    })
}

/// `n` boxes inside `[-1, 1]^dim`, each with 4 subdivisions per axis.
pub fn scatter_regions(dim: usize, n: usize, seed: u64) -> Result<Vec<Compact>, GeomError> {
    let mut values = unit_stream(seed).map(|u| 2.0 * u - 1.0);
    let grid = MultiIndex::from_slice(&vec![4; dim]);
    let mut regions = Vec::with_capacity(n);
    for _ in 0..n {
        let a: Vec<f64> = values.by_ref().take(dim).collect();
        let b: Vec<f64> = values.by_ref().take(dim).collect();
        regions.push(Compact::new(
            &Vector::from_slice(&a)?,
            &Vector::from_slice(&b)?,
            &grid,
        )?);
    }
    Ok(regions)
}

/// `n` points in `[-1.5, 1.5]^dim`, so roughly a third fall outside the
/// unit box on each axis.
pub fn probe_points(dim: usize, n: usize, seed: u64) -> Result<Vec<Vector>, GeomError> {
    let mut values = unit_stream(seed).map(|u| 3.0 * u - 1.5);
    (0..n)
        .map(|_| {
            let coords: Vec<f64> = values.by_ref().take(dim).collect();
            Vector::from_slice(&coords)
        })
        .collect()
}
