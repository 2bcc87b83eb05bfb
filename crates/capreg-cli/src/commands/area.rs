//! `capreg area` and `capreg total-area`.

use serde_json::json;
use tracing::instrument;

use capreg_core::application::AreaService;
use capreg_core::domain::{Dimensions, Discriminator, Shape};

use super::build_registry;
use crate::{
    cli::{AreaArgs, TotalAreaArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(shape = %args.shape))]
pub fn execute(args: AreaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let shape = Shape::new(
        Discriminator::try_new(&args.shape)?,
        Dimensions::parse_pairs(&args.dims)?,
    );
    let service = AreaService::new(build_registry(&config)?);
    let area = service.area(&shape)?;

    if output.is_json() {
        output.json(&json!({ "shape": shape.kind, "area": area }))?;
    } else if output.is_human() {
        output.success(&format!("{} area = {:.3}", shape.kind, area))?;
    } else {
        output.result(&area.to_string())?;
    }
    Ok(())
}

#[instrument(skip_all, fields(count = args.shapes.len()))]
pub fn total(args: TotalAreaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let shapes = args
        .shapes
        .iter()
        .map(String::as_str)
        .map(parse_shape)
        .collect::<CliResult<Vec<_>>>()?;

    let service = AreaService::new(build_registry(&config)?);
    let total = service.total_area(&shapes)?;

    if output.is_json() {
        output.json(&json!({ "shapes": shapes.len(), "total": total }))?;
    } else if output.is_human() {
        output.success(&format!("total area of {} shape(s) = {:.3}", shapes.len(), total))?;
    } else {
        output.result(&total.to_string())?;
    }
    Ok(())
}

/// Parse `SHAPE:name=value,name=value`.
fn parse_shape(arg: &str) -> CliResult<Shape> {
    let (kind, dims) = arg.split_once(':').ok_or_else(|| {
        CliError::invalid_input(format!(
            "Malformed shape '{arg}', expected SHAPE:name=value,..."
        ))
    })?;

    let pairs = dims.split(',').map(str::trim).filter(|p| !p.is_empty());
    Ok(Shape::new(
        Discriminator::try_new(kind)?,
        Dimensions::parse_pairs(pairs)?,
    ))
}
