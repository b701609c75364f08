// Imports
use super::AreaStrategy;
use crate::error::AreaError;
use crate::shapes::{ShapeKind, Shapeable};

/// Calculates the area of rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleAreaStrategy;

impl AreaStrategy for RectangleAreaStrategy {
    fn supported_kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn calculate_area(&self, shape: &dyn Shapeable) -> Result<f64, AreaError> {
        match shape.kind() {
            ShapeKind::Rectangle => Ok(shape.area()),
            found => Err(AreaError::UnsupportedShape {
                strategy: ShapeKind::Rectangle,
                found,
            }),
        }
    }
}
