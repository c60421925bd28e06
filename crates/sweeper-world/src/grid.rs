//! Grid data store backed by a fixed-format CSV cell table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::LoadError;

/// Integer grid coordinate. Ordering is lexicographic on (x, y), which is
/// the canonical tie-break order everywhere a single cell must be picked
/// out of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// One cell of the terrain: signed height deltas toward each neighbour,
/// a surface texture tag, and the remaining dust.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub delta_left: i32,
    pub delta_right: i32,
    pub delta_up: i32,
    pub delta_down: i32,
    pub texture: String,
    pub dust_weight: f64,
    pub cleaned: bool,
}

impl Cell {
    /// A level cell with the given dust load. Convenient for programmatic
    /// grid construction.
    pub fn flat(dust_weight: f64) -> Self {
        Self {
            delta_left: 0,
            delta_right: 0,
            delta_up: 0,
            delta_down: 0,
            texture: String::new(),
            dust_weight,
            cleaned: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CellRow {
    #[serde(rename = "XCoordination")]
    x: i32,
    #[serde(rename = "YCoordination")]
    y: i32,
    #[serde(rename = "DeltaL")]
    delta_left: i32,
    #[serde(rename = "DeltaR")]
    delta_right: i32,
    #[serde(rename = "DeltaU")]
    delta_up: i32,
    #[serde(rename = "DeltaD")]
    delta_down: i32,
    #[serde(rename = "Texture")]
    texture: String,
    #[serde(rename = "DustWeight")]
    dust_weight: f64,
}

/// The environment the agent operates in. The agent never reads this map
/// wholesale; it only performs point lookups and suction.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: BTreeMap<Position, Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cell table in the fixed CSV column format
    /// (`XCoordination,YCoordination,DeltaL,DeltaR,DeltaU,DeltaD,Texture,DustWeight`).
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut grid = Self::new();
        for row in reader.deserialize() {
            let row: CellRow = row?;
            grid.insert(
                Position::new(row.x, row.y),
                Cell {
                    delta_left: row.delta_left,
                    delta_right: row.delta_right,
                    delta_up: row.delta_up,
                    delta_down: row.delta_down,
                    texture: row.texture,
                    dust_weight: row.dust_weight,
                    cleaned: false,
                },
            );
        }
        Ok(grid)
    }

    pub fn insert(&mut self, pos: Position, cell: Cell) {
        self.cells.insert(pos, cell);
    }

    /// Point lookup; `None` when `pos` is outside the grid.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Apply suction at `pos`, removing up to `capacity` dust. The cell is
    /// flagged cleaned once its dust reaches zero. Returns the remaining
    /// dust, or `None` if `pos` is outside the grid.
    pub fn suck(&mut self, pos: Position, capacity: f64) -> Option<f64> {
        let cell = self.cells.get_mut(&pos)?;
        cell.dust_weight = (cell.dust_weight - capacity).max(0.0);
        if cell.dust_weight == 0.0 {
            cell.cleaned = true;
        }
        Some(cell.dust_weight)
    }

    /// Maximum x and y coordinates present in the grid; (0, 0) when empty.
    pub fn dimensions(&self) -> (i32, i32) {
        let mut max_x = 0;
        let mut max_y = 0;
        for pos in self.cells.keys() {
            max_x = max_x.max(pos.x);
            max_y = max_y.max(pos.y);
        }
        (max_x, max_y)
    }

    /// Percentage of cells with remaining dust, in [0, 100].
    pub fn percent_dirty(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let dirty = self
            .cells
            .values()
            .filter(|cell| cell.dust_weight > 0.0)
            .count();
        (dirty as f64 / self.cells.len() as f64) * 100.0
    }

    /// Dust levels formatted row by row, missing cells shown as `-`.
    pub fn dust_rows(&self) -> Vec<String> {
        let (max_x, max_y) = self.dimensions();
        let mut rows = Vec::with_capacity((max_y + 1) as usize);
        for y in 0..=max_y {
            let mut row = String::new();
            for x in 0..=max_x {
                if x > 0 {
                    row.push('\t');
                }
                match self.get(Position::new(x, y)) {
                    Some(cell) => row.push_str(&format!("{:.1}", cell.dust_weight)),
                    None => row.push('-'),
                }
            }
            rows.push(row);
        }
        rows
    }
}
