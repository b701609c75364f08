// Modules
mod circlefactory;
mod rectanglefactory;
/// ShapeFactory trait.
pub mod shapefactory;

// Re-exports
pub use circlefactory::CircleFactory;
pub use rectanglefactory::RectangleFactory;
pub use shapefactory::ShapeFactory;

// Imports
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "shapefactory_type")]
/// A choice for a shape factory type
pub enum ShapeFactoryType {
    /// A rectangle factory
    #[serde(rename = "rectangle")]
    #[default]
    Rectangle = 0,
    /// A circle factory
    #[serde(rename = "circle")]
    Circle,
}

impl ShapeFactoryType {
    /// The factory for this type.
    pub fn factory(self) -> Box<dyn ShapeFactory> {
        match self {
            Self::Rectangle => Box::new(RectangleFactory),
            Self::Circle => Box::new(CircleFactory),
        }
    }
}

impl TryFrom<u32> for ShapeFactoryType {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .with_context(|| format!("ShapeFactoryType try_from::<u32>() for value {value} failed"))
    }
}
