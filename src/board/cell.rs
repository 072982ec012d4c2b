/*
cell.rs

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

//! Kinds of board cells.

use serde::{Deserialize, Serialize};

use super::position::Direction;

/// Content of a board cell.
///
/// - `Grass` is an empty cell. It is the only kind of cell where features can be placed.
/// - `Start` is a starting field for a player, facing the given direction.
/// - `Checkpoint` must be reached by the players in increasing `order`.
/// - `Eye` is the Eye of Sauron. There is exactly one per board and it cannot be crossed.
/// - `Hole` cannot be crossed.
/// - `Lembas` is a resource field holding `amount` lembas.
/// - `River` can be crossed and flows in the given direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CellKind {
    #[default]
    Grass,
    Start(Direction),
    Checkpoint(usize),
    Eye(Direction),
    Hole,
    Lembas(u32),
    River(Direction),
}

impl CellKind {
    /// Whether a figure can stand on the cell.
    pub fn is_walkable(&self) -> bool {
        !matches!(self, CellKind::Eye(_) | CellKind::Hole)
    }

    /// Whether the cell is a river.
    pub fn is_river(&self) -> bool {
        matches!(self, CellKind::River(_))
    }

    /// One-character symbol used for debug dumps of the board.
    pub fn symbol(&self) -> char {
        match self {
            CellKind::Grass => '.',
            CellKind::Start(_) => 'S',
            CellKind::Checkpoint(_) => 'C',
            CellKind::Eye(_) => 'E',
            CellKind::Hole => 'O',
            CellKind::Lembas(_) => 'L',
            CellKind::River(d) => match d {
                Direction::North => '^',
                Direction::East => '>',
                Direction::South => 'v',
                Direction::West => '<',
            },
        }
    }
}
