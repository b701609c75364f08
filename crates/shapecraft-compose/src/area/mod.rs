// Modules
mod calculator;
mod circlestrategy;
mod rectanglestrategy;
/// AreaStrategy trait.
pub mod strategy;

// Re-exports
pub use calculator::AreaCalculator;
pub use circlestrategy::CircleAreaStrategy;
pub use rectanglestrategy::RectangleAreaStrategy;
pub use strategy::AreaStrategy;

// Imports
use crate::shapes::ShapeKind;
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
#[serde(rename = "areastrategy_type")]
/// A choice for an area strategy type
pub enum AreaStrategyType {
    /// The rectangle area strategy
    #[serde(rename = "rectangle")]
    #[default]
    Rectangle = 0,
    /// The circle area strategy
    #[serde(rename = "circle")]
    Circle,
}

impl AreaStrategyType {
    /// The strategy type able to handle shapes of the given kind.
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::Rectangle,
            ShapeKind::Circle => Self::Circle,
        }
    }

    /// The strategy for this type.
    pub fn strategy(self) -> Box<dyn AreaStrategy> {
        match self {
            Self::Rectangle => Box::new(RectangleAreaStrategy),
            Self::Circle => Box::new(CircleAreaStrategy),
        }
    }
}

impl TryFrom<u32> for AreaStrategyType {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .with_context(|| format!("AreaStrategyType try_from::<u32>() for value {value} failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_for_kind() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Circle] {
            assert_eq!(
                AreaStrategyType::for_kind(kind).strategy().supported_kind(),
                kind
            );
        }
    }

    #[test]
    fn try_from_u32() {
        assert_eq!(
            AreaStrategyType::try_from(1_u32).unwrap(),
            AreaStrategyType::Circle
        );
        assert!(AreaStrategyType::try_from(5_u32).is_err());
    }
}
