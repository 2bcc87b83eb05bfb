//! Area providers.
//!
//! Each shape knows which measurements it needs and asks for them by name;
//! a missing one is an `InvalidInput` provider error.

mod circle;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

use capreg_core::error::ProviderError;

/// Finite measurements can still multiply past `f64::MAX`.
fn finite(area: f64) -> Result<f64, ProviderError> {
    if area.is_finite() {
        Ok(area)
    } else {
        Err(ProviderError::invalid_input(
            "area is too large to represent",
        ))
    }
}
