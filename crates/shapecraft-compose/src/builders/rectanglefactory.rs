// Imports
use super::ShapeFactory;
use crate::shapes::Rectangle;
use crate::Shape;

/// Rectangle factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleFactory;

impl RectangleFactory {
    /// The width of created rectangles.
    pub const WIDTH: f64 = 5.0;
    /// The height of created rectangles.
    pub const HEIGHT: f64 = 10.0;
}

impl ShapeFactory for RectangleFactory {
    fn create_shape(&self) -> Shape {
        tracing::trace!("Creating rectangle {}x{}", Self::WIDTH, Self::HEIGHT);
        Shape::Rectangle(Rectangle::new_unchecked(Self::WIDTH, Self::HEIGHT))
    }
}
