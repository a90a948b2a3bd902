use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{EngineError, EngineResult, Position};

/// Pattern cell that gets painted.
pub const FILL_MARKER: char = 'x';
/// Pattern cell that gets painted and marks the pointer hotspot.
/// Exactly one is expected per pattern.
pub const ANCHOR_MARKER: char = 'o';
/// Pattern cell that paints nothing.
pub const BLANK_MARKER: char = '.';

/// A brush pattern resolved into anchor-relative cell offsets.
///
/// A pattern is a square character grid written as text, e.g. a plus-shaped
/// 3x3 brush:
///
/// ```text
/// .x.
/// xox
/// .x.
/// ```
///
/// Whitespace is insignificant. The anchor cell is always part of the
/// footprint, so the offset `(0, 0)` is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    side: i32,
    offsets: Vec<Position>,
    missing_anchor: bool,
}

impl Footprint {
    /// Resolves a pattern text into a footprint.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPatternShape` if the stripped pattern
    /// length is not a positive perfect square.
    pub fn resolve(pattern: &str) -> EngineResult<Self> {
        Ok(Self::resolve_pattern(pattern)?)
    }

    pub(crate) fn resolve_pattern(pattern: &str) -> Result<Self, EngineError> {
        let stripped: Vec<char> = pattern.chars().filter(|ch| !ch.is_whitespace()).collect();
        let length = stripped.len();
        let side = (length as f64).sqrt().round() as usize;
        if length == 0 || side * side != length {
            return Err(EngineError::InvalidPatternShape { length });
        }

        let anchor = stripped.iter().position(|&ch| ch == ANCHOR_MARKER);
        let missing_anchor = anchor.is_none();
        if missing_anchor {
            log::warn!("brush pattern has no '{ANCHOR_MARKER}' anchor marker, defaulting to the first cell");
        }
        let anchor = anchor.unwrap_or(0);
        let anchor_pos = Position::new((anchor % side) as i32, (anchor / side) as i32);

        let mut offsets = Vec::new();
        for (i, &ch) in stripped.iter().enumerate() {
            // Anything that is not a fill or anchor marker is a no-op cell.
            if ch == FILL_MARKER || ch == ANCHOR_MARKER || (i == anchor && missing_anchor) {
                let pos = Position::new((i % side) as i32, (i / side) as i32);
                offsets.push(pos - anchor_pos);
            }
        }

        Ok(Footprint {
            side: side as i32,
            offsets,
            missing_anchor,
        })
    }

    /// Side length of the square pattern grid.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Anchor-relative offsets of every painted cell.
    pub fn offsets(&self) -> &[Position] {
        &self.offsets
    }

    /// True if the pattern had no anchor marker and the anchor was
    /// defaulted to the first cell. Non-fatal diagnostic.
    pub fn missing_anchor(&self) -> bool {
        self.missing_anchor
    }
}

/// Memoizes footprint resolution per distinct pattern text.
///
/// A pattern that failed to resolve stays invalid for the lifetime of the
/// cache, so the error is memoized as well.
#[derive(Default)]
pub struct FootprintCache {
    entries: Mutex<HashMap<String, Result<Arc<Footprint>, EngineError>>>,
}

impl FootprintCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `pattern`, returning the cached footprint if this text was
    /// seen before.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidPatternShape` (possibly cached) for a
    /// malformed pattern.
    pub fn resolve(&self, pattern: &str) -> EngineResult<Arc<Footprint>> {
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get(pattern) {
            return entry.clone().map_err(Into::into);
        }
        let entry = Footprint::resolve_pattern(pattern).map(Arc::new);
        entries.insert(pattern.to_string(), entry.clone());
        entry.map_err(Into::into)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
