// Imports
use serde::{Deserialize, Serialize};

/// The kind of a shape.
///
/// Every shape carries its kind, decorated shapes report the kind of the shape they wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename = "shape_kind")]
pub enum ShapeKind {
    /// A rectangle.
    #[serde(rename = "rectangle")]
    Rectangle,
    /// A circle.
    #[serde(rename = "circle")]
    Circle,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rectangle => "rectangle",
                Self::Circle => "circle",
            }
        )
    }
}
