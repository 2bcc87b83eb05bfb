use capreg_core::{
    application::ports::Provider,
    domain::{AreaCalculation, Dimensions},
    error::ProviderError,
};

use super::finite;

/// `width × height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl Provider<AreaCalculation> for Rectangle {
    fn execute(&self, dims: Dimensions) -> Result<f64, ProviderError> {
        finite(dims.require("width")? * dims.require("height")?)
    }
}
