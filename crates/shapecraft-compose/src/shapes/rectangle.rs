// Imports
use super::{ShapeKind, Shapeable};
use crate::error::ShapeError;
use crate::render::DrawContext;
use kurbo::Shape as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename = "rectangle", try_from = "RectangleDimensions")]
/// A rectangle, anchored with its upper-left corner at the origin.
pub struct Rectangle {
    #[serde(rename = "width")]
    width: f64,
    #[serde(rename = "height")]
    height: f64,
}

/// Unchecked dimensions, validated when converting into a [Rectangle].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename = "rectangle")]
struct RectangleDimensions {
    #[serde(rename = "width")]
    width: f64,
    #[serde(rename = "height")]
    height: f64,
}

impl TryFrom<RectangleDimensions> for Rectangle {
    type Error = ShapeError;

    fn try_from(dimensions: RectangleDimensions) -> Result<Self, Self::Error> {
        Self::new(dimensions.width, dimensions.height)
    }
}

impl Shapeable for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn draw(&self, cx: &mut dyn DrawContext) {
        cx.draw_line("Drawing a rectangle");
    }

    fn area(&self) -> f64 {
        self.to_kurbo().area()
    }

    fn outline_path(&self) -> kurbo::BezPath {
        self.to_kurbo().to_path(0.25)
    }

    fn bounds(&self) -> kurbo::Rect {
        self.to_kurbo()
    }
}

impl Rectangle {
    /// Construct from width and height.
    ///
    /// Both must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            width: ShapeError::check_dimension("width", width)?,
            height: ShapeError::check_dimension("height", height)?,
        })
    }

    /// Construct without checking the dimensions. Only for known, valid constants.
    pub(crate) const fn new_unchecked(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Converts to [kurbo::Rect].
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(kurbo::Point::ZERO, (self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingContext;
    use kurbo::Shape as _;

    #[test]
    fn area_is_exact_for_integers() {
        let rectangle = Rectangle::new(5.0, 10.0).unwrap();
        assert_eq!(rectangle.area(), 50.0);

        let rectangle = Rectangle::new(3.0, 7.0).unwrap();
        assert_eq!(rectangle.area(), 21.0);
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert_eq!(
            Rectangle::new(0.0, 10.0),
            Err(ShapeError::InvalidDimension {
                name: "width",
                value: 0.0
            })
        );
        assert!(Rectangle::new(5.0, -1.0).is_err());
        assert!(Rectangle::new(f64::NAN, 1.0).is_err());
        assert!(Rectangle::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn draws_one_line() {
        let mut cx = RecordingContext::new();
        Rectangle::new(1.0, 2.0).unwrap().draw(&mut cx);

        assert_eq!(cx.lines(), ["Drawing a rectangle"]);
    }

    #[test]
    fn bounds() {
        let bounds = Rectangle::new(5.0, 10.0).unwrap().bounds();

        assert_eq!(bounds, kurbo::Rect::new(0.0, 0.0, 5.0, 10.0));
    }

    #[test]
    fn outline_path() {
        let outline = Rectangle::new(5.0, 10.0).unwrap().outline_path();

        assert_eq!(outline.bounding_box(), kurbo::Rect::new(0.0, 0.0, 5.0, 10.0));
        assert_eq!(outline.area().abs(), 50.0);
    }
}
