// Imports
use crate::shapes::ShapeKind;
use thiserror::Error;

/// Errors when calculating the area of a shape through a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AreaError {
    /// The strategy is not able to handle the kind of the given shape.
    #[error("unsupported shape: {strategy} area strategy can't compute the area of a {found}")]
    UnsupportedShape {
        /// The kind the strategy supports.
        strategy: ShapeKind,
        /// The kind of the shape that was passed in.
        found: ShapeKind,
    },
    /// The calculator was asked for an area before a strategy was selected.
    #[error("no area strategy selected")]
    NoStrategySelected,
}

/// Errors when constructing shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A dimension is not finite or not positive.
    #[error("invalid {name} `{value}`, expected a finite, positive number")]
    InvalidDimension {
        /// Name of the dimension.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ShapeError {
    /// Check the given dimension, returning it if valid.
    pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidDimension { name, value })
        }
    }
}
