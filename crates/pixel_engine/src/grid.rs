use crate::{Color, EngineError, EngineResult, Position};

/// The authoritative square matrix of cell colors.
///
/// Owned exclusively by the engine and mutated only by stroke commits;
/// `Clone` produces the independent deep copy used for history snapshots.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    side: i32,
    cells: Vec<Color>,
}

impl PixelGrid {
    /// Creates a grid of `side` x `side` cells, every cell set to the
    /// background color.
    pub fn new(side: i32, background: Color) -> Self {
        assert!(side > 0, "grid side must be positive");
        PixelGrid {
            side,
            cells: vec![background; (side * side) as usize],
        }
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn in_bounds(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.x >= 0 && pos.x < self.side && pos.y >= 0 && pos.y < self.side
    }

    /// .
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if the coordinate is outside
    /// `[0, side)` on either axis.
    pub fn get(&self, pos: impl Into<Position>) -> EngineResult<Color> {
        let pos = pos.into();
        if !self.in_bounds(pos) {
            return Err(EngineError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                side: self.side,
            }
            .into());
        }
        Ok(self.cells[(pos.y * self.side + pos.x) as usize])
    }

    /// .
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` if the coordinate is outside
    /// `[0, side)` on either axis.
    pub fn set(&mut self, pos: impl Into<Position>, color: Color) -> EngineResult<()> {
        let pos = pos.into();
        if !self.in_bounds(pos) {
            return Err(EngineError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                side: self.side,
            }
            .into());
        }
        self.cells[(pos.y * self.side + pos.x) as usize] = color;
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }
}

impl std::fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelGrid").field("side", &self.side).finish_non_exhaustive()
    }
}
