//! Intersection configuration.

use tessera_core::GeomError;

/// What [`Compact::intersection_with`](crate::Compact::intersection_with)
/// does when the operands do not overlap beyond tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmptyIntersection {
    /// Return the region anyway; some axis has `left > right` and
    /// [`Compact::is_empty`](crate::Compact::is_empty) reports `true`.
    #[default]
    Permissive,
    /// Fail with `InvalidArgument` naming the first inverted axis.
    Reject,
}

/// Parameters for tolerance-aware intersection.
///
/// Validated when the intersection is built; all values are plain data.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionConfig {
    /// Largest boundary gap treated as touching.
    ///
    /// Default: [`DEFAULT_TOLERANCE`](Self::DEFAULT_TOLERANCE).
    /// Must be finite and strictly positive.
    pub tolerance: f64,

    /// Handling of an empty result. Default: permissive.
    pub empty: EmptyIntersection,
}

impl IntersectionConfig {
    /// Default boundary tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-8;

    /// Config with the given tolerance and default empty-result handling.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            empty: EmptyIntersection::default(),
        }
    }

    /// Builder-style setter for [`empty`](Self::empty).
    pub fn with_empty(mut self, empty: EmptyIntersection) -> Self {
        self.empty = empty;
        self
    }

    /// Check that the tolerance is finite and positive.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(GeomError::invalid(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOLERANCE)
    }
}
