//! Uniform sector grid over the coordinate plane.
//!
//! The plane is cut into fixed-width square sectors. Nodes and edges are
//! bucketed by the sectors they fall in or cross, so viewport queries touch
//! only the buckets intersecting the requested region instead of scanning
//! the whole map.

use geo::{Point, Rect};
use serde::Serialize;

/// Side length of every sector, in map units.
pub const SECTOR_WIDTH: f64 = 300.0;

/// A square cell of the sector grid, identified by its (row, col) index.
/// Two sectors with the same indices are the same sector. Sectors index
/// nodes and edges; they never own them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MapSector {
    pub row: i32,
    pub col: i32,
}

impl MapSector {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The sector containing the given point.
    pub fn containing(point: Point<f64>) -> Self {
        Self {
            row: (point.x() / SECTOR_WIDTH).floor() as i32,
            col: (point.y() / SECTOR_WIDTH).floor() as i32,
        }
    }

    /// The region this sector covers.
    pub fn bounds(&self) -> Rect<f64> {
        let x0 = f64::from(self.row) * SECTOR_WIDTH;
        let y0 = f64::from(self.col) * SECTOR_WIDTH;
        Rect::new((x0, y0), (x0 + SECTOR_WIDTH, y0 + SECTOR_WIDTH))
    }

    /// All sectors intersecting the given axis-aligned region.
    ///
    /// Computed from the sectors of the region's two corners: if they agree,
    /// that single sector covers the region, otherwise the full inclusive
    /// block of rows and columns between them is returned. The block never
    /// omits an intersecting sector.
    pub fn intersecting(region: &Rect<f64>) -> Vec<MapSector> {
        let lo = Self::containing(Point::from(region.min()));
        let hi = Self::containing(Point::from(region.max()));
        if lo == hi {
            return vec![lo];
        }
        let rows = (hi.row - lo.row + 1) as usize;
        let cols = (hi.col - lo.col + 1) as usize;
        let mut sectors = Vec::with_capacity(rows * cols);
        for row in lo.row..=hi.row {
            for col in lo.col..=hi.col {
                sectors.push(MapSector { row, col });
            }
        }
        sectors
    }

    /// All sectors a segment between the two points may pass through,
    /// approximated by the segment's bounding rectangle. Conservative: the
    /// true line may not cross every sector of its bounding box, but no
    /// crossed sector is ever left out.
    pub fn spanning(a: Point<f64>, b: Point<f64>) -> Vec<MapSector> {
        Self::intersecting(&Rect::new(a, b))
    }
}
