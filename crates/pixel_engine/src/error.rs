//! Unified error types for pixel_engine

use thiserror::Error;

/// Main error type for pixel_engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    // === Brush Errors ===
    #[error("Brush pattern length {length} is not a perfect square")]
    InvalidPatternShape { length: usize },

    // === Grid Errors ===
    #[error("Cell ({x}, {y}) out of bounds (grid side {side})")]
    OutOfBounds { x: i32, y: i32, side: i32 },

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    // === Stroke Errors ===
    #[error("A stroke is already active; end it before beginning another")]
    StrokeAlreadyActive,
}
