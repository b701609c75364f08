// Imports
use super::AreaStrategy;
use crate::error::AreaError;
use crate::shapes::Shapeable;
use tracing::{debug, warn};

/// Calculates areas through the currently selected strategy.
///
/// Starts out without a strategy when created through [Default], calculating an area in that
/// state fails with [AreaError::NoStrategySelected].
#[derive(Debug, Default)]
pub struct AreaCalculator {
    strategy: Option<Box<dyn AreaStrategy>>,
}

impl AreaCalculator {
    /// A new calculator with the strategy selected.
    pub fn new(strategy: impl AreaStrategy + 'static) -> Self {
        Self {
            strategy: Some(Box::new(strategy)),
        }
    }

    /// Select the strategy, replacing the previous one.
    pub fn set_strategy(&mut self, strategy: impl AreaStrategy + 'static) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    /// Select an already boxed strategy, replacing the previous one.
    pub fn set_boxed_strategy(&mut self, strategy: Box<dyn AreaStrategy>) {
        debug!(kind = %strategy.supported_kind(), "Selecting area strategy");
        self.strategy = Some(strategy);
    }

    /// The currently selected strategy.
    pub fn strategy(&self) -> Option<&dyn AreaStrategy> {
        self.strategy.as_deref()
    }

    /// Calculate the area of the shape with the selected strategy.
    pub fn calculate_area(&self, shape: &dyn Shapeable) -> Result<f64, AreaError> {
        let strategy = self.strategy().ok_or(AreaError::NoStrategySelected)?;

        match strategy.calculate_area(shape) {
            Ok(area) => {
                debug!(kind = %shape.kind(), area, "Calculated area");
                Ok(area)
            }
            Err(e) => {
                warn!("Area calculation rejected the shape, Err: {e}");
                Err(e)
            }
        }
    }
}
