//! Domain membership trait.

use crate::diag::{report, Severity};
use crate::error::GeomError;
use crate::vector::Vector;

/// A region that can answer "is this point admissible?".
///
/// Evaluators that store a parameter or argument domain hold it through
/// this trait and use it purely as a validity oracle.
pub trait Domain {
    /// Number of spatial dimensions.
    fn dim(&self) -> usize;

    /// `Ok(true)` iff `point` lies in the domain.
    ///
    /// Fails with `DimensionMismatch` if `point.dim() != self.dim()`.
    fn contains(&self, point: &Vector) -> Result<bool, GeomError>;

    /// Boolean form of [`contains`](Self::contains): an error is reported
    /// and treated as "outside".
    #[track_caller]
    fn is_inside(&self, point: &Vector) -> bool {
        match self.contains(point) {
            Ok(inside) => inside,
            Err(err) => {
                report(&err, Severity::Warning, "Domain::is_inside");
                false
            }
        }
    }
}
