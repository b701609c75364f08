// Imports
use crate::Shape;

/// Types that create shapes.
///
/// Factories take no input and always succeed, each one producing a freshly constructed shape
/// with its built-in parameters.
pub trait ShapeFactory: std::fmt::Debug {
    /// Create a new shape.
    fn create_shape(&self) -> Shape;
}
