// Imports
use crate::render::DrawContext;
use crate::shapes::{ShapeKind, Shapeable};

/// Draws a border around the wrapped shape.
#[derive(Debug)]
pub struct BorderDecorator {
    inner: Box<dyn Shapeable>,
}

impl BorderDecorator {
    /// Wrap the shape, taking ownership of it.
    pub fn new(shape: impl Shapeable + 'static) -> Self {
        Self {
            inner: Box::new(shape),
        }
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

impl Shapeable for BorderDecorator {
    fn kind(&self) -> ShapeKind {
        self.inner.kind()
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        self.inner.draw(cx);
        tracing::trace!("Drawing border decoration");
        cx.draw_line("Adding border to the shape.");
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
