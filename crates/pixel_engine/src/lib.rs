#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

mod position;
pub use position::*;

mod color;
pub use color::*;

mod grid;
pub use grid::*;

mod brush;
pub use brush::*;

mod stroke;
pub use stroke::*;

mod history;
pub use history::*;

mod engine;
pub use engine::*;

mod error;
pub use error::*;

pub type EngineResult<T> = anyhow::Result<T>;
