// Imports
use super::{ShapeKind, Shapeable};
use crate::error::ShapeError;
use crate::render::DrawContext;
use kurbo::Shape as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "circle", try_from = "CircleDimensions")]
/// A circle, centered on the origin.
pub struct Circle {
    /// The radius of the circle.
    #[serde(rename = "radius")]
    radius: f64,
}

/// Unchecked dimensions, validated when converting into a [Circle].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename = "circle")]
struct CircleDimensions {
    #[serde(rename = "radius")]
    radius: f64,
}

impl TryFrom<CircleDimensions> for Circle {
    type Error = ShapeError;

    fn try_from(dimensions: CircleDimensions) -> Result<Self, Self::Error> {
        Self::new(dimensions.radius)
    }
}

impl Shapeable for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        cx.draw_line("Drawing a circle");
    }

    fn area(&self) -> f64 {
        self.to_kurbo().area()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        self.to_kurbo().to_path(0.25)
    }

    fn bounds(&self) -> kurbo::Rect {
        self.to_kurbo().bounding_box()
    }
}

impl Circle {
    /// Construct from the radius, which must be finite and positive.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: ShapeError::check_dimension("radius", radius)?,
        })
    }

    pub(crate) const fn new_unchecked(radius: f64) -> Self {
        Self { radius }
    }

    /// The radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Converts to [kurbo::Circle].
    pub fn to_kurbo(&self) -> kurbo::Circle {
        kurbo::Circle::new(kurbo::Point::ZERO, self.radius)
    }
}
