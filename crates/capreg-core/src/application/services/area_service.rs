//! Area Service - measure shapes through whichever area providers are wired.

use tracing::{debug, instrument};

use crate::{
    application::CapabilityRegistry,
    domain::{AreaCalculation, DomainError, Shape},
    error::RegistryResult,
};

/// Service for area calculations.
#[derive(Debug, Clone)]
pub struct AreaService {
    registry: CapabilityRegistry,
}

impl AreaService {
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Area of one shape, computed by the provider bound to `shape.kind`.
    pub fn area(&self, shape: &Shape) -> RegistryResult<f64> {
        self.registry
            .invoke::<AreaCalculation>(&shape.kind, shape.dimensions.clone())
    }

    /// Sum of the areas of `shapes`. The first failing shape aborts the sum.
    #[instrument(skip_all, fields(shapes = shapes.len()))]
    pub fn total_area(&self, shapes: &[Shape]) -> RegistryResult<f64> {
        let mut total = 0.0;
        for shape in shapes {
            total += self.area(shape)?;
        }
        if !total.is_finite() {
            return Err(DomainError::AreaOverflow {
                shapes: shapes.len(),
            }
            .into());
        }
        debug!(total, "Total area computed");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::provider_fn;
    use crate::domain::{Dimensions, Discriminator};
    use crate::error::{ProviderError, RegistryError};

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::builder()
            .provider::<AreaCalculation>(
                "rectangle",
                provider_fn::<AreaCalculation, _>(|d: Dimensions| {
                    Ok(d.require("width")? * d.require("height")?)
                }),
            )
            .provider::<AreaCalculation>(
                "square",
                provider_fn::<AreaCalculation, _>(|d: Dimensions| {
                    let side = d.require("side")?;
                    Ok(side * side)
                }),
            )
            .provider::<AreaCalculation>(
                "broken",
                provider_fn::<AreaCalculation, _>(|_| Err(ProviderError::internal("nope"))),
            )
            .build()
            .unwrap()
    }

    fn shape(kind: &str, dims: &[(&str, f64)]) -> Shape {
        let dimensions = dims
            .iter()
            .fold(Dimensions::new(), |d, (name, value)| d.with(*name, *value));
        Shape::new(Discriminator::new(kind), dimensions)
    }

    #[test]
    fn area_dispatches_by_kind() {
        let service = AreaService::new(registry());

        let rect = shape("rectangle", &[("width", 5.0), ("height", 10.0)]);
        let square = shape("square", &[("side", 3.0)]);

        assert_eq!(service.area(&rect).unwrap(), 50.0);
        assert_eq!(service.area(&square).unwrap(), 9.0);
    }

    #[test]
    fn total_area_sums_mixed_shapes() {
        let service = AreaService::new(registry());
        let shapes = [
            shape("rectangle", &[("width", 2.0), ("height", 3.0)]),
            shape("square", &[("side", 2.0)]),
        ];

        assert_eq!(service.total_area(&shapes).unwrap(), 10.0);
        assert_eq!(service.total_area(&[]).unwrap(), 0.0);
    }

    #[test]
    fn total_area_stops_at_first_failure() {
        let service = AreaService::new(registry());
        let shapes = [
            shape("square", &[("side", 2.0)]),
            shape("hexagon", &[("side", 2.0)]),
            shape("broken", &[]),
        ];

        let err = service.total_area(&shapes).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownProvider { .. }));
    }

    #[test]
    fn provider_input_errors_surface_as_provider_failure() {
        let service = AreaService::new(registry());
        let missing_height = shape("rectangle", &[("width", 5.0)]);

        let err = service.area(&missing_height).unwrap_err();
        assert!(err.is_provider_failure());
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn total_area_rejects_overflowing_sum() {
        let service = AreaService::new(registry());
        let side = f64::MAX.sqrt() * 0.9;
        let shapes = [shape("square", &[("side", side)]), shape("square", &[("side", side)])];

        assert!(service.area(&shapes[0]).unwrap().is_finite());
        let err = service.total_area(&shapes).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Domain(DomainError::AreaOverflow { shapes: 2 })
        ));
    }
}
