//! Board model: identifier, informational dimensions and live cells

use super::{BoundingBox, Coordinate, LiveCells};
use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque 128-bit board identifier, shown as 32 lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoardId(u128);

impl BoardId {
    pub const NIL: BoardId = BoardId(0);

    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub const fn as_u128(self) -> u128 {
        self.0
    }

    pub fn is_nil(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for BoardId {
    type Err = InputError;

    /// Accepts the plain 32-digit form and the hyphenated 8-4-4-4-12 form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InputError::InvalidBoardId(s.to_string());

        let digits: String = if s.len() == 36 {
            let hyphens_ok = [8, 13, 18, 23].iter().all(|&i| s.as_bytes()[i] == b'-');
            if !hyphens_ok {
                return Err(invalid());
            }
            s.chars().filter(|&c| c != '-').collect()
        } else {
            s.to_string()
        };

        if digits.len() != 32 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        u128::from_str_radix(&digits, 16).map(BoardId).map_err(|_| invalid())
    }
}

impl TryFrom<String> for BoardId {
    type Error = InputError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BoardId> for String {
    fn from(id: BoardId) -> Self {
        id.to_string()
    }
}

/// A board as supplied by a caller, before it has been assigned an id
///
/// Deserialization rejects cells outside [`Coordinate::LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedDescription")]
pub struct BoardDescription {
    pub width: usize,
    pub height: usize,
    pub live_cells: LiveCells,
}

impl BoardDescription {
    /// Check every live cell is within [`Coordinate::LIMIT`]
    pub fn validate(&self) -> Result<(), InputError> {
        match self.live_cells.iter().find(|c| !c.is_within_limit()) {
            Some(Coordinate { x, y }) => Err(InputError::CoordinateOutOfRange { x, y }),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
struct UncheckedDescription {
    width: usize,
    height: usize,
    live_cells: LiveCells,
}

impl TryFrom<UncheckedDescription> for BoardDescription {
    type Error = InputError;

    fn try_from(raw: UncheckedDescription) -> Result<Self, Self::Error> {
        let description = BoardDescription {
            width: raw.width,
            height: raw.height,
            live_cells: raw.live_cells,
        };
        description.validate()?;
        Ok(description)
    }
}

/// A stored Game of Life board
///
/// `width` and `height` are carried as metadata only; cells may live anywhere
/// on the plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub width: usize,
    pub height: usize,
    pub live_cells: LiveCells,
}

impl Board {
    pub fn new(id: BoardId, description: BoardDescription) -> Self {
        Self {
            id,
            width: description.width,
            height: description.height,
            live_cells: description.live_cells,
        }
    }

    pub fn living_count(&self) -> usize {
        self.live_cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live_cells.is_empty()
    }

    /// Region worth drawing: the nominal `width`×`height` area anchored at the
    /// origin, widened to include any cell that has wandered outside it
    pub fn viewport(&self) -> Option<BoundingBox> {
        // dimensions past i64::MAX are clamped; they only matter for drawing
        let extent = |len: usize| i64::try_from(len).unwrap_or(i64::MAX) - 1;
        let nominal = (self.width > 0 && self.height > 0).then(|| BoundingBox {
            min: Coordinate::new(0, 0),
            max: Coordinate::new(extent(self.width), extent(self.height)),
        });

        match (nominal, self.live_cells.bounding_box()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        }
    }
}
