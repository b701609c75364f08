// Imports
use crate::decorators::{BorderDecorator, ColorDecorator};
use crate::shapes::Shapeable;

/// Extension trait for wrapping shapes in decorators.
pub trait ShapeableExt
where
    Self: Sized,
{
    /// Wrap in a [BorderDecorator].
    fn with_border(self) -> BorderDecorator;
    /// Wrap in a [ColorDecorator] applying the given color.
    fn with_color(self, color: impl Into<String>) -> ColorDecorator;
}

impl<T> ShapeableExt for T
where
    T: Shapeable + 'static,
{
    fn with_border(self) -> BorderDecorator {
        BorderDecorator::new(self)
    }

    fn with_color(self, color: impl Into<String>) -> ColorDecorator {
        ColorDecorator::new(self, color)
    }
}
