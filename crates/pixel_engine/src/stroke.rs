use std::collections::HashMap;

use crate::{Color, EngineResult, Footprint, PaintSettings, PixelGrid, Position};

/// Tracks which cells the current stroke has touched. Same dimensions as
/// the grid, created at stroke begin and discarded at stroke end.
#[derive(Clone, PartialEq, Eq)]
pub struct StrokeMask {
    side: i32,
    cells: Vec<bool>,
}

impl StrokeMask {
    pub fn new(side: i32) -> Self {
        StrokeMask {
            side,
            cells: vec![false; (side * side) as usize],
        }
    }

    pub fn is_set(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[(pos.y * self.side + pos.x) as usize]
    }

    pub fn set(&mut self, pos: impl Into<Position>) {
        let pos = pos.into();
        if self.in_bounds(pos) {
            self.cells[(pos.y * self.side + pos.x) as usize] = true;
        }
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.side && pos.y >= 0 && pos.y < self.side
    }

    /// Touched cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &set)| set)
            .map(move |(i, _)| Position::new(i as i32 % side, i as i32 / side))
    }
}

/// The active stroke: touched-cell mask, preview overlay and the pre-stroke
/// grid snapshot used for the undo history entry.
///
/// Preview colors are always blended against the committed grid, never
/// against the preview overlay itself. Stamping the same cell twice within
/// one stroke therefore yields the same color as stamping it once.
pub struct StrokeSession {
    mask: StrokeMask,
    preview: HashMap<Position, Color>,
    undo_snapshot: PixelGrid,
}

impl StrokeSession {
    pub(crate) fn new(grid: &PixelGrid) -> Self {
        StrokeSession {
            mask: StrokeMask::new(grid.side()),
            preview: HashMap::new(),
            undo_snapshot: grid.clone(),
        }
    }

    /// Applies one footprint stamp anchored at `anchor`. Out-of-bounds
    /// footprint cells are filtered, not errors.
    pub(crate) fn stamp(&mut self, grid: &PixelGrid, anchor: Position, footprint: &Footprint, settings: &PaintSettings) -> EngineResult<()> {
        for &offset in footprint.offsets() {
            let cell = anchor + offset;
            if !grid.in_bounds(cell) {
                continue;
            }
            self.mask.set(cell);
            self.preview.insert(cell, Color::blend(grid.get(cell)?, settings.color, settings.opacity));
        }
        Ok(())
    }

    /// Preview color for a cell, if the stroke has touched it.
    pub fn preview(&self, pos: impl Into<Position>) -> Option<Color> {
        self.preview.get(&pos.into()).copied()
    }

    pub fn mask(&self) -> &StrokeMask {
        &self.mask
    }

    /// Commits every masked cell into the grid and returns the touched
    /// cells plus the pre-stroke snapshot. Consumes the session; mask and
    /// preview die here.
    pub(crate) fn finish(self, grid: &mut PixelGrid) -> EngineResult<(Vec<Position>, PixelGrid)> {
        let mut touched = Vec::new();
        for pos in self.mask.positions() {
            if let Some(color) = self.preview.get(&pos) {
                grid.set(pos, *color)?;
                touched.push(pos);
            }
        }
        Ok((touched, self.undo_snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::{StrokeMask, StrokeSession};
    use crate::{Color, Footprint, PaintSettings, PixelGrid, Position};

    #[test]
    fn test_mask_ignores_out_of_bounds() {
        let mut mask = StrokeMask::new(4);
        mask.set((-1, 0));
        mask.set((0, 4));
        mask.set((2, 3));

        assert!(!mask.is_set((-1, 0)));
        assert!(!mask.is_set((0, 4)));
        assert!(mask.is_set((2, 3)));
        assert_eq!(vec![Position::new(2, 3)], mask.positions().collect::<Vec<_>>());
    }

    #[test]
    fn test_session_tracks_mask_and_preview() {
        let mut grid = PixelGrid::new(8, Color::new(0xFF, 0xFF, 0xFF));
        let footprint = Footprint::resolve("o").unwrap();
        let settings = PaintSettings::new(Color::new(0, 0, 0), "o", 0.5);

        let mut session = StrokeSession::new(&grid);
        session.stamp(&grid, Position::new(1, 1), &footprint, &settings).unwrap();

        assert!(session.mask().is_set((1, 1)));
        assert_eq!(Some(Color::new(0x80, 0x80, 0x80)), session.preview((1, 1)));
        assert_eq!(None, session.preview((2, 1)));

        let (touched, snapshot) = session.finish(&mut grid).unwrap();
        assert_eq!(vec![Position::new(1, 1)], touched);
        assert_eq!(Color::new(0x80, 0x80, 0x80), grid.get((1, 1)).unwrap());
        assert_eq!(Color::new(0xFF, 0xFF, 0xFF), snapshot.get((1, 1)).unwrap());
    }
}
