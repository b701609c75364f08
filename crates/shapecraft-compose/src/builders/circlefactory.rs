// Imports
use super::ShapeFactory;
use crate::shapes::Circle;
use crate::Shape;

/// Circle factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleFactory;

impl CircleFactory {
    /// The radius of created circles.
    pub const RADIUS: f64 = 7.0;
}

impl ShapeFactory for CircleFactory {
    fn create_shape(&self) -> Shape {
        tracing::trace!("Creating circle with radius {}", Self::RADIUS);
        Shape::Circle(Circle::new_unchecked(Self::RADIUS))
    }
}
