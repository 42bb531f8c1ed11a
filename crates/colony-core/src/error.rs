//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `ColonyError` as one
//! variant where they need to surface core failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("position ({x}, {y}) lies outside the {size}x{size} grid")]
    OutOfGrid { x: f32, y: f32, size: u32 },
}
