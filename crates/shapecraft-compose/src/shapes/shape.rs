// Imports
use super::{Circle, Rectangle, ShapeKind, Shapeable};
use crate::render::DrawContext;
use serde::{Deserialize, Serialize};

/// Shape, storing shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "shape")]
pub enum Shape {
    #[serde(rename = "rect")]
    /// A rectangle shape.
    Rectangle(Rectangle),
    #[serde(rename = "circle")]
    /// A circle shape.
    Circle(Circle),
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl Shapeable for Shape {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(rectangle) => rectangle.kind(),
            Self::Circle(circle) => circle.kind(),
        }
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        match self {
            Self::Rectangle(rectangle) => rectangle.draw(cx),
            Self::Circle(circle) => circle.draw(cx),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Self::Rectangle(rectangle) => rectangle.area(),
            Self::Circle(circle) => circle.area(),
        }
    }

    fn outline_path(&self) -> kurbo::BezPath {
        match self {
            Self::Rectangle(rectangle) => rectangle.outline_path(),
            Self::Circle(circle) => circle.outline_path(),
        }
    }

    fn bounds(&self) -> kurbo::Rect {
        match self {
            Self::Rectangle(rectangle) => rectangle.bounds(),
            Self::Circle(circle) => circle.bounds(),
        }
    }
}
