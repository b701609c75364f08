#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! the shapecraft-compose crate provides building blocks for creating, decorating, drawing shapes
//! and calculating their areas.

// Modules
/// module for area strategies and the area calculator
pub mod area;
/// module for shape factories
pub mod builders;
/// module for decorators, that can be wrapped around shapes
pub mod decorators;
/// errors
pub mod error;
/// module for extension traits
pub mod ext;
/// draw contexts
pub mod render;
/// module for shapes
pub mod shapes;

// Re-exports
pub use area::{AreaCalculator, AreaStrategy};
pub use builders::ShapeFactory;
pub use error::{AreaError, ShapeError};
pub use ext::ShapeableExt;
pub use render::DrawContext;
pub use shapes::{Shape, ShapeKind, Shapeable};
