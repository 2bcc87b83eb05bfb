use capreg_core::{
    application::ports::Provider,
    domain::{AreaCalculation, Dimensions},
    error::ProviderError,
};

use super::finite;

/// `½ × base × height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triangle;

impl Provider<AreaCalculation> for Triangle {
    fn execute(&self, dims: Dimensions) -> Result<f64, ProviderError> {
        finite(0.5 * dims.require("base")? * dims.require("height")?)
    }
}
