// Imports
use super::ShapeKind;
use crate::render::DrawContext;
use kurbo::Shape as _;

/// Types that behave as a shape.
pub trait Shapeable: std::fmt::Debug {
    /// The kind of the shape.
    fn kind(&self) -> ShapeKind;
    /// Draw the shape onto the context.
    fn draw(&self, cx: &mut dyn DrawContext);
    /// The area of the shape.
    fn area(&self) -> f64;
    /// generate the path of its outline as a [kurbo::BezPath].
    fn outline_path(&self) -> kurbo::BezPath;
    /// The bounds of the shape.
    fn bounds(&self) -> kurbo::Rect {
        self.outline_path().bounding_box()
    }
}

impl<T> Shapeable for Box<T>
where
    T: Shapeable + ?Sized,
{
    fn kind(&self) -> ShapeKind {
        (**self).kind()
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        (**self).draw(cx)
    }

    fn area(&self) -> f64 {
        (**self).area()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        (**self).outline_path()
    }

    fn bounds(&self) -> kurbo::Rect {
        (**self).bounds()
    }
}
