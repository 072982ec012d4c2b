/*
position.rs

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

//! Cell coordinates and cardinal directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Coordinates of a cell on the board.
///
/// Positions are serialized as `[x, y]` integer pairs.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    /// Row, compared first so that sorting positions gives the row-major order.
    pub y: usize,

    /// Column.
    pub x: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two positions.
    pub fn manhattan(&self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Euclidean distance between two positions.
    pub fn euclidean(&self, other: Position) -> f64 {
        let dx: f64 = self.x as f64 - other.x as f64;
        let dy: f64 = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether the two positions share an edge.
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Return the neighbor in the given direction, or None if it would leave a board of the given
    /// size.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Position> {
        let p: Position = match direction {
            Direction::North => Position::new(self.x, self.y.checked_sub(1)?),
            Direction::East => Position::new(self.x.checked_add(1)?, self.y),
            Direction::South => Position::new(self.x, self.y.checked_add(1)?),
            Direction::West => Position::new(self.x.checked_sub(1)?, self.y),
        };
        if p.x < width && p.y < height {
            Some(p)
        } else {
            None
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from(a: [usize; 2]) -> Self {
        Position::new(a[0], a[1])
    }
}

impl From<Position> for [usize; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal directions.
///
/// The explicit representation is used to draw a random direction with
/// [`Direction::from_repr`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Direction {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All the directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Return the reverse direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Return the two directions at right angle.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::North => write!(f, "NORTH"),
            Direction::East => write!(f, "EAST"),
            Direction::South => write!(f, "SOUTH"),
            Direction::West => write!(f, "WEST"),
        }
    }
}
