/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Board Generator.

Board Generator is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Board Generator is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Board Generator. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Dense matrix of board cells.

use log::{Level, debug, log_enabled};

use super::cell::CellKind;
use super::position::{Direction, Position};

/// Board cells, stored row by row (`cells[y][x]`).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Cell matrix.
    cells: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Create a [`Grid`] object where all the cells are grass.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![CellKind::Grass; width]; height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Get the cell at the given position, or None if the position is outside the grid.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        if self.contains(pos) {
            Some(self.cells[pos.y][pos.x])
        } else {
            None
        }
    }

    /// Set the cell at the given position.
    ///
    /// Return `false`, and leave the grid untouched, if the position is outside the grid.
    pub fn set(&mut self, pos: Position, kind: CellKind) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.cells[pos.y][pos.x] = kind;
        true
    }

    /// Whether the cell is inside the grid and is grass.
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(CellKind::Grass))
    }

    /// Return the positions of the cells north, east, south, and west of the given position that
    /// are inside the grid.
    pub fn neighbors4(&self, pos: Position) -> Vec<(Direction, Position)> {
        Direction::ALL
            .iter()
            .filter_map(|d| pos.step(*d, self.width, self.height).map(|p| (*d, p)))
            .collect()
    }

    /// Number of grass cells around the given position.
    pub fn free_neighbors(&self, pos: Position) -> usize {
        self.neighbors4(pos)
            .iter()
            .filter(|(_, p)| self.is_free(*p))
            .count()
    }

    /// Number of grass cells in the grid.
    pub fn free_count(&self) -> usize {
        self.iter().filter(|(_, k)| *k == CellKind::Grass).count()
    }

    /// Print the grid in the debug log.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let mut s: String = String::with_capacity(self.width);
        for row in &self.cells {
            s.clear();
            for cell in row {
                s.push(cell.symbol());
            }
            debug!("{s}");
        }
    }

    /// Iterate over the cells, row by row.
    ///
    /// # Example:
    ///
    /// ```
    /// use board_generator::board::grid::Grid;
    ///
    /// let grid: Grid = Grid::new(3, 2);
    /// for (pos, kind) in grid.iter().filter(|(_, k)| k.is_walkable()) {
    ///     println!("{pos} -> {kind:?}");
    /// }
    /// ```
    pub fn iter(&self) -> GridIterator<'_> {
        GridIterator {
            grid: self,
            x: 0,
            y: 0,
        }
    }
}

/// Iterator for the cell matrix.
pub struct GridIterator<'a> {
    grid: &'a Grid,
    x: usize,
    y: usize,
}

/// Iterator implementation.
impl Iterator for GridIterator<'_> {
    type Item = (Position, CellKind);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.grid.width {
            self.x = 0;
            self.y += 1;
        }
        if self.y >= self.grid.height || self.grid.width == 0 {
            return None;
        }

        let pos: Position = Position::new(self.x, self.y);
        let result: (Position, CellKind) = (pos, self.grid.cells[self.y][self.x]);
        self.x += 1;
        Some(result)
    }
}
