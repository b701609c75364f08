// Modules
mod border;
mod color;

// Re-exports
pub use border::BorderDecorator;
pub use color::ColorDecorator;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::ShapeableExt;
    use crate::render::RecordingContext;
    use crate::shapes::{Circle, Rectangle, Shape, ShapeKind, Shapeable};
    use approx::assert_relative_eq;

    #[test]
    fn draw_order_follows_wrap_order() {
        let shape = BorderDecorator::new(ColorDecorator::new(Circle::new(7.0).unwrap(), "Vermelho"));

        let mut cx = RecordingContext::new();
        shape.draw(&mut cx);

        assert_eq!(
            cx.lines(),
            [
                "Drawing a circle",
                "Applying color Vermelho to the shape.",
                "Adding border to the shape.",
            ]
        );
    }

    #[test]
    fn nested_decorations_keep_area() {
        let rectangle = Rectangle::new(5.0, 10.0).unwrap();
        let plain_area = rectangle.area();

        let decorated = Shape::from(rectangle)
            .with_color("Azul")
            .with_border()
            .with_border()
            .with_color("Verde");

        assert_eq!(decorated.area(), plain_area);
        assert_eq!(decorated.kind(), ShapeKind::Rectangle);

        let circle = Circle::new(3.0).unwrap();
        let decorated = circle.with_border().with_color("Azul");
        assert_relative_eq!(decorated.area(), circle.area());
        assert_eq!(decorated.bounds(), circle.bounds());
    }

    #[test]
    fn outline_passes_through() {
        let rectangle = Rectangle::new(5.0, 10.0).unwrap();
        let decorated = rectangle.with_color("Azul").with_border();

        assert_eq!(decorated.outline_path(), rectangle.outline_path());

        let circle = Circle::new(7.0).unwrap();
        let decorated = circle.with_border().with_color("Vermelho");

        assert_eq!(decorated.outline_path(), circle.outline_path());
    }

    #[test]
    fn unwrap_decorations() {
        let decorated = ColorDecorator::new(Rectangle::new(1.0, 1.0).unwrap(), "Azul");
        assert_eq!(decorated.color(), "Azul");
        assert_eq!(decorated.inner().kind(), ShapeKind::Rectangle);

        let inner = decorated.into_inner();
        let mut cx = RecordingContext::new();
        inner.draw(&mut cx);

        assert_eq!(cx.lines(), ["Drawing a rectangle"]);
    }
}
