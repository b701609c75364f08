// Imports
use crate::error::AreaError;
use crate::shapes::{ShapeKind, Shapeable};

/// An algorithm for calculating the area of shapes of one kind.
pub trait AreaStrategy: std::fmt::Debug {
    /// The shape kind this strategy is able to handle.
    fn supported_kind(&self) -> ShapeKind;

    /// Calculate the area of the shape.
    ///
    /// Fails with [AreaError::UnsupportedShape] when the kind of the shape doesn't match
    /// the supported kind. Decorated shapes are matched by the kind of the shape they wrap.
    fn calculate_area(&self, shape: &dyn Shapeable) -> Result<f64, AreaError>;
}
