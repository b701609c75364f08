// Modules
mod circle;
mod rectangle;
mod shape;
mod shapeable;
mod shapekind;

// Re-exports
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use shapeable::Shapeable;
pub use shapekind::ShapeKind;
