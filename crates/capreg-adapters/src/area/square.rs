use capreg_core::{
    application::ports::Provider,
    domain::{AreaCalculation, Dimensions},
    error::ProviderError,
};

use super::finite;

/// `side²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Provider<AreaCalculation> for Square {
    fn execute(&self, dims: Dimensions) -> Result<f64, ProviderError> {
        let side = dims.require("side")?;
        finite(side * side)
    }
}
