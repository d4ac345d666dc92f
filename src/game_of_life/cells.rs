//! Sparse live-cell sets on the unbounded integer plane

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A cell position on the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    /// Largest magnitude accepted for either axis of an uploaded cell.
    ///
    /// A pattern grows by at most one cell per generation, so stepping from
    /// in-range cells cannot overflow `i64` within any reachable step count.
    pub const LIMIT: i64 = 1 << 62;

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn is_within_limit(self) -> bool {
        self.x.unsigned_abs() <= Self::LIMIT as u64 && self.y.unsigned_abs() <= Self::LIMIT as u64
    }

    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The 8 cells of the Moore neighborhood, excluding the cell itself
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        iproduct!(-1i64..=1, -1i64..=1)
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i64, i64) {
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive rectangle of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub fn union(self, other: BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Coordinate::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Coordinate::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Number of cells covered, `None` if it does not fit in a `u64`
    pub fn area(&self) -> Option<u64> {
        self.width().checked_mul(self.height())
    }
}

/// The set of live cells of a board
///
/// Duplicates collapse on construction and equality ignores insertion order.
/// Serialized as a list of `[x, y]` pairs sorted by row, then column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct LiveCells {
    cells: HashSet<Coordinate>,
}

impl LiveCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(x, y)` pairs
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        pairs.iter().copied().map(Coordinate::from).collect()
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Set equality, the basis of stability detection
    pub fn equals(&self, other: &LiveCells) -> bool {
        self.cells == other.cells
    }

    /// Returns false if the cell was already live
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        self.cells.insert(coord)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn as_set(&self) -> &HashSet<Coordinate> {
        &self.cells
    }

    /// Number of live cells among the 8 neighbors of `coord`
    pub fn live_neighbor_count(&self, coord: Coordinate) -> u8 {
        coord.neighbors().filter(|&n| self.contains(n)).count() as u8
    }

    /// Cells in row-major order (by `y`, then `x`)
    pub fn sorted(&self) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = self.iter().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.iter();
        let first = iter.next()?;
        let start = BoundingBox { min: first, max: first };
        Some(iter.fold(start, |bbox, c| bbox.union(BoundingBox { min: c, max: c })))
    }

    /// Copy of the set shifted by `(dx, dy)`
    pub fn translated(&self, dx: i64, dy: i64) -> Self {
        self.iter().map(|c| c.offset(dx, dy)).collect()
    }
}

impl FromIterator<Coordinate> for LiveCells {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl From<HashSet<Coordinate>> for LiveCells {
    fn from(cells: HashSet<Coordinate>) -> Self {
        Self { cells }
    }
}

impl From<Vec<Coordinate>> for LiveCells {
    fn from(cells: Vec<Coordinate>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<LiveCells> for Vec<Coordinate> {
    fn from(cells: LiveCells) -> Self {
        cells.sorted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_exclude_self() {
        let origin = Coordinate::new(0, 0);
        let neighbors: HashSet<Coordinate> = origin.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&origin));
        assert!(neighbors.contains(&Coordinate::new(-1, -1)));
        assert!(neighbors.contains(&Coordinate::new(1, 0)));
    }

    #[test]
    fn test_duplicates_collapse() {
        let cells = LiveCells::from_pairs(&[(1, 1), (2, 2), (1, 1)]);
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(Coordinate::new(1, 1)));
        assert!(!cells.contains(Coordinate::new(3, 3)));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = LiveCells::from_pairs(&[(0, 0), (5, -3), (2, 7)]);
        let b = LiveCells::from_pairs(&[(2, 7), (0, 0), (5, -3), (0, 0)]);
        let c = LiveCells::from_pairs(&[(2, 7), (0, 0)]);

        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert!(LiveCells::new().equals(&LiveCells::new()));
    }

    #[test]
    fn test_live_neighbor_count() {
        let cells = LiveCells::from_pairs(&[
            (0, 0), (1, 0), (2, 0),
            (0, 1),         (2, 1),
            (0, 2), (1, 2), (2, 2),
        ]);

        assert_eq!(cells.live_neighbor_count(Coordinate::new(1, 1)), 8);
        assert_eq!(cells.live_neighbor_count(Coordinate::new(0, 0)), 2);
        assert_eq!(cells.live_neighbor_count(Coordinate::new(-1, -1)), 1);
        assert_eq!(cells.live_neighbor_count(Coordinate::new(10, 10)), 0);
    }

    #[test]
    fn test_bounding_box_and_translation() {
        assert_eq!(LiveCells::new().bounding_box(), None);

        let cells = LiveCells::from_pairs(&[(-2, 3), (4, -1), (0, 0)]);
        let bbox = cells.bounding_box().unwrap();
        assert_eq!(bbox.min, Coordinate::new(-2, -1));
        assert_eq!(bbox.max, Coordinate::new(4, 3));
        assert_eq!(bbox.width(), 7);
        assert_eq!(bbox.height(), 5);

        let moved = cells.translated(10, -10);
        assert!(moved.contains(Coordinate::new(8, -7)));
        assert_eq!(moved.len(), 3);
    }

    #[test]
    fn test_serde_sorted_pairs() {
        let cells = LiveCells::from_pairs(&[(2, 1), (0, 1), (1, 0)]);
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, "[[1,0],[0,1],[2,1]]");

        let parsed: LiveCells = serde_json::from_str("[[1,0],[1,0],[3,4]]").unwrap();
        assert_eq!(parsed, LiveCells::from_pairs(&[(1, 0), (3, 4)]));
    }

    #[test]
    fn test_coordinate_limit() {
        assert!(Coordinate::new(Coordinate::LIMIT, -Coordinate::LIMIT).is_within_limit());
        assert!(!Coordinate::new(Coordinate::LIMIT + 1, 0).is_within_limit());
        assert!(!Coordinate::new(0, i64::MIN).is_within_limit());
        assert!(!Coordinate::new(i64::MAX, 0).is_within_limit());
    }

    #[test]
    fn test_area_of_huge_box() {
        let huge = BoundingBox {
            min: Coordinate::new(i64::MIN, i64::MIN),
            max: Coordinate::new(i64::MAX, i64::MAX),
        };
        assert_eq!(huge.width(), u64::MAX);
        assert_eq!(huge.area(), None);

        let small = BoundingBox { min: Coordinate::new(-1, -1), max: Coordinate::new(1, 2) };
        assert_eq!(small.area(), Some(12));
    }
}
