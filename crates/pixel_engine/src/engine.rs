use serde::{Deserialize, Serialize};

use crate::{Color, DEFAULT_HISTORY_CAPACITY, EngineError, EngineResult, FootprintCache, HistoryStack, PixelGrid, Position, StrokeSession};

/// Brush parameters read at each stamp. Selected by the host (palette and
/// tool UI), not owned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintSettings {
    pub color: Color,
    /// Brush pattern text, see [`crate::Footprint`].
    pub pattern: String,
    /// Opacity fraction in `(0, 1]`.
    pub opacity: f32,
}

impl PaintSettings {
    pub fn new(color: Color, pattern: impl Into<String>, opacity: f32) -> Self {
        PaintSettings {
            color,
            pattern: pattern.into(),
            opacity,
        }
    }
}

/// Maps a raw pointer position to a cell coordinate given a fixed cell
/// size. Returns `None` for positions left of or above the surface; the
/// caller still has to bounds-check against the grid side.
pub fn cell_at(pointer: (f32, f32), cell_size: f32) -> Option<Position> {
    if cell_size <= 0.0 || pointer.0 < 0.0 || pointer.1 < 0.0 {
        return None;
    }
    Some(Position::new((pointer.0 / cell_size) as i32, (pointer.1 / cell_size) as i32))
}

/// The stroke compositing engine: the grid, the undo history, the footprint
/// cache and the at-most-one active stroke.
///
/// Single logical thread of control: `begin_stroke` / `move_stroke` /
/// `end_stroke` run to completion before the next event. A multi-threaded
/// host must serialize all engine calls externally.
pub struct PaintEngine {
    grid: PixelGrid,
    history: HistoryStack,
    footprints: FootprintCache,
    stroke: Option<StrokeSession>,
}

impl PaintEngine {
    /// Creates an engine over a `side` x `side` grid filled with the
    /// background color, with the default history capacity.
    pub fn new(side: i32, background: Color) -> Self {
        Self::with_history_capacity(side, background, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_history_capacity(side: i32, background: Color, capacity: usize) -> Self {
        PaintEngine {
            grid: PixelGrid::new(side, background),
            history: HistoryStack::new(capacity),
            footprints: FootprintCache::new(),
            stroke: None,
        }
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke.is_some()
    }

    /// Begins a stroke anchored at `pos` and stamps the first footprint.
    /// The grid is not mutated; touched cells get preview colors.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::StrokeAlreadyActive` if a stroke is already
    /// active, or `EngineError::InvalidPatternShape` for a malformed brush
    /// pattern.
    pub fn begin_stroke(&mut self, pos: impl Into<Position>, settings: &PaintSettings) -> EngineResult<()> {
        if self.stroke.is_some() {
            return Err(EngineError::StrokeAlreadyActive.into());
        }
        let footprint = self.footprints.resolve(&settings.pattern)?;
        let mut session = StrokeSession::new(&self.grid);
        session.stamp(&self.grid, pos.into(), &footprint, settings)?;
        self.stroke = Some(session);
        Ok(())
    }

    /// Stamps the footprint at a new anchor within the active stroke.
    ///
    /// A move without an active stroke is a no-op, not an error: pointer
    /// moves can arrive without a preceding press.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPatternShape` for a malformed brush
    /// pattern.
    pub fn move_stroke(&mut self, pos: impl Into<Position>, settings: &PaintSettings) -> EngineResult<()> {
        let Some(session) = self.stroke.as_mut() else {
            return Ok(());
        };
        let footprint = self.footprints.resolve(&settings.pattern)?;
        session.stamp(&self.grid, pos.into(), &footprint, settings)
    }

    /// Ends the active stroke: commits the blended color of every touched
    /// cell into the grid and returns those cells. If at least one cell
    /// value changed, the pre-stroke snapshot is recorded into the history
    /// (the entry is the grid as it was before the stroke).
    ///
    /// An end without an active stroke returns an empty set: release
    /// events can arrive without a matching press.
    pub fn end_stroke(&mut self) -> EngineResult<Vec<Position>> {
        let Some(session) = self.stroke.take() else {
            return Ok(Vec::new());
        };
        let (touched, snapshot) = session.finish(&mut self.grid)?;
        if self.grid != snapshot {
            log::debug!("stroke committed, {} cells touched", touched.len());
            self.history.record(snapshot);
        }
        Ok(touched)
    }

    /// .
    ///
    /// # Errors
    ///
    /// Returns `EngineError::OutOfBounds` for a coordinate outside the
    /// grid.
    pub fn get_cell(&self, pos: impl Into<Position>) -> EngineResult<Color> {
        self.grid.get(pos)
    }

    /// Read-only deep copy of the grid for rendering.
    pub fn grid_snapshot(&self) -> PixelGrid {
        self.grid.clone()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Overlay color for a cell touched by the active stroke, `None` when
    /// idle or untouched.
    pub fn preview_cell(&self, pos: impl Into<Position>) -> Option<Color> {
        self.stroke.as_ref().and_then(|session| session.preview(pos))
    }

    /// Records a snapshot unless it equals the current history top.
    /// Returns whether an entry was added.
    pub fn push_history_if_changed(&mut self, snapshot: PixelGrid) -> bool {
        self.history.record(snapshot)
    }

    pub fn peek_history(&self) -> Option<&PixelGrid> {
        self.history.peek()
    }

    pub fn pop_history(&mut self) -> Option<PixelGrid> {
        self.history.pop()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Restores the grid from the newest snapshot, consuming it. Returns
    /// whether a snapshot was applied. Any active stroke keeps its mask;
    /// hosts normally undo only while idle.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.pop() {
            self.grid = snapshot;
            true
        } else {
            false
        }
    }
}
