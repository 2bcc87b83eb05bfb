use std::f64::consts::PI;

use capreg_core::{
    application::ports::Provider,
    domain::{AreaCalculation, Dimensions},
    error::ProviderError,
};

use super::finite;

/// `π × radius²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl Provider<AreaCalculation> for Circle {
    fn execute(&self, dims: Dimensions) -> Result<f64, ProviderError> {
        let radius = dims.require("radius")?;
        finite(PI * radius * radius)
    }
}
