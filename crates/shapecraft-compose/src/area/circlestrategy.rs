// Imports
use super::AreaStrategy;
use crate::error::AreaError;
use crate::shapes::{ShapeKind, Shapeable};

/// Calculates the area of circles.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleAreaStrategy;

impl AreaStrategy for CircleAreaStrategy {
    fn supported_kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn calculate_area(&self, shape: &dyn Shapeable) -> Result<f64, AreaError> {
        match shape.kind() {
            ShapeKind::Circle => Ok(shape.area()),
            found => Err(AreaError::UnsupportedShape {
                strategy: ShapeKind::Circle,
                found,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorators::{BorderDecorator, ColorDecorator};
    use crate::shapes::{Circle, Rectangle};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn decorated_circle() {
        let decorated =
            BorderDecorator::new(ColorDecorator::new(Circle::new(7.0).unwrap(), "Vermelho"));

        let area = CircleAreaStrategy.calculate_area(&decorated).unwrap();
        assert_relative_eq!(area, 49.0 * PI);
    }

    #[test]
    fn rejects_rectangles() {
        let err = CircleAreaStrategy
            .calculate_area(&Rectangle::new(5.0, 10.0).unwrap())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "unsupported shape: circle area strategy can't compute the area of a rectangle"
        );
    }
}
