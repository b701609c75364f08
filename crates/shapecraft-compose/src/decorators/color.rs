// Imports
use crate::render::DrawContext;
use crate::shapes::{ShapeKind, Shapeable};

/// Applies a color to the wrapped shape.
#[derive(Debug)]
pub struct ColorDecorator {
    inner: Box<dyn Shapeable>,
    color: String,
}

impl ColorDecorator {
    /// Wrap the shape, taking ownership of it.
    pub fn new(shape: impl Shapeable + 'static, color: impl Into<String>) -> Self {
        Self {
            inner: Box::new(shape),
            color: color.into(),
        }
    }

    /// The applied color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The wrapped shape.
    pub fn inner(&self) -> &dyn Shapeable {
        self.inner.as_ref()
    }

    /// Unwrap, returning the wrapped shape.
    pub fn into_inner(self) -> Box<dyn Shapeable> {
        self.inner
    }
}

impl Shapeable for ColorDecorator {
    fn kind(&self) -> ShapeKind {
        self.inner.kind()
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        self.inner.draw(cx);
        tracing::trace!(color = %self.color, "Drawing color decoration");
        cx.draw_line(&format!("Applying color {} to the shape.", self.color));
    }

    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        self.inner.outline_path()
    }

    fn bounds(&self) -> kurbo::Rect {
        self.inner.bounds()
    }
}
