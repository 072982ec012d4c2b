/*
config.rs

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

//! Serializable board configuration.
//!
//! The [`BoardConfig`] object is the record that the generator returns and that the other
//! components (rendering, persistence, the board editor) consume.
//! It serializes in JSON as:
//!
//! ```json
//! {
//!   "name": "Shire",
//!   "width": 3,
//!   "height": 3,
//!   "eye": { "position": [2, 2], "direction": "NORTH" },
//!   "startFields": [{ "position": [0, 1], "direction": "EAST" }],
//!   "checkPoints": [[1, 1], [1, 2]],
//!   "lembasFields": [{ "position": [0, 0], "amount": 3 }],
//!   "holes": [[2, 0]],
//!   "riverFields": [{ "position": [0, 2], "direction": "SOUTH" }],
//!   "walls": [[[1, 0], [1, 1]]]
//! }
//! ```
//!
//! The index of a checkpoint in `checkPoints` is its order.

use log::warn;
use serde::{Deserialize, Serialize};

use super::cell::CellKind;
use super::grid::Grid;
use super::position::{Direction, Position};
use super::walls::WallMap;

/// Position with a facing direction (eye, start fields, rivers).
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct DirectedPosition {
    pub position: Position,
    pub direction: Direction,
}

impl DirectedPosition {
    /// Create a [`DirectedPosition`] object.
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Lembas field and the number of lembas it holds.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LembasField {
    pub position: Position,
    pub amount: u32,
}

/// Board configuration record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub eye: DirectedPosition,
    pub start_fields: Vec<DirectedPosition>,

    /// Checkpoints, in the order the players must reach them.
    pub check_points: Vec<Position>,

    #[serde(default)]
    pub lembas_fields: Vec<LembasField>,

    #[serde(default)]
    pub holes: Vec<Position>,

    #[serde(default)]
    pub river_fields: Vec<DirectedPosition>,

    #[serde(default)]
    pub walls: Vec<[Position; 2]>,
}

impl BoardConfig {
    /// Create a [`BoardConfig`] object with only the eye.
    pub fn new(name: &str, width: usize, height: usize, eye: DirectedPosition) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            eye,
            ..Default::default()
        }
    }

    /// Positions of the start fields. The first one is the hub for the reachability checks.
    pub fn start_positions(&self) -> Vec<Position> {
        self.start_fields.iter().map(|s| s.position).collect()
    }

    /// Positions of the lembas fields.
    pub fn lembas_positions(&self) -> Vec<Position> {
        self.lembas_fields.iter().map(|l| l.position).collect()
    }

    /// Build the cell matrix described by the configuration.
    ///
    /// Features outside the board are skipped. Rivers are written first so that a feature sharing
    /// its cell with a river wins.
    pub fn to_grid(&self) -> Grid {
        let mut grid: Grid = Grid::new(self.width, self.height);
        let mut cells: Vec<(Position, CellKind)> = Vec::new();

        cells.extend(
            self.river_fields
                .iter()
                .map(|r| (r.position, CellKind::River(r.direction))),
        );
        cells.extend(self.holes.iter().map(|h| (*h, CellKind::Hole)));
        cells.extend(
            self.lembas_fields
                .iter()
                .map(|l| (l.position, CellKind::Lembas(l.amount))),
        );
        cells.extend(
            self.check_points
                .iter()
                .enumerate()
                .map(|(order, c)| (*c, CellKind::Checkpoint(order))),
        );
        cells.extend(
            self.start_fields
                .iter()
                .map(|s| (s.position, CellKind::Start(s.direction))),
        );
        cells.push((self.eye.position, CellKind::Eye(self.eye.direction)));

        for (pos, kind) in cells {
            if !grid.set(pos, kind) {
                warn!(
                    "Board {}: {kind:?} at {pos} is outside the {}x{} board",
                    self.name, self.width, self.height
                );
            }
        }
        grid
    }

    /// Build the wall set described by the configuration.
    ///
    /// Walls between cells that are not adjacent are skipped.
    pub fn to_wall_map(&self) -> WallMap {
        let mut walls: WallMap = WallMap::new();

        for [a, b] in &self.walls {
            if !a.is_adjacent(*b) {
                warn!("Board {}: wall {a}-{b} is not between adjacent cells", self.name);
                continue;
            }
            walls.add(*a, *b);
        }
        walls
    }

    /// Build a configuration from a cell matrix and a wall set.
    ///
    /// Features are collected row by row, checkpoints are sorted by order, and walls are kept in
    /// the [`WallMap`] order.
    /// Return None if the grid has no eye.
    pub fn from_board(name: &str, grid: &Grid, walls: &WallMap) -> Option<Self> {
        let mut eye: Option<DirectedPosition> = None;
        let mut config: BoardConfig = BoardConfig {
            name: name.to_string(),
            width: grid.width(),
            height: grid.height(),
            ..Default::default()
        };
        let mut check_points: Vec<(usize, Position)> = Vec::new();

        for (pos, kind) in grid.iter() {
            match kind {
                CellKind::Grass => (),
                CellKind::Start(d) => config.start_fields.push(DirectedPosition::new(pos, d)),
                CellKind::Checkpoint(order) => check_points.push((order, pos)),
                CellKind::Eye(d) => {
                    if eye.is_some() {
                        warn!("Board {name}: more than one eye, ignoring the eye at {pos}");
                    } else {
                        eye = Some(DirectedPosition::new(pos, d));
                    }
                }
                CellKind::Hole => config.holes.push(pos),
                CellKind::Lembas(amount) => config.lembas_fields.push(LembasField {
                    position: pos,
                    amount,
                }),
                CellKind::River(d) => config.river_fields.push(DirectedPosition::new(pos, d)),
            }
        }

        check_points.sort_by_key(|(order, _)| *order);
        config.check_points = check_points.into_iter().map(|(_, p)| p).collect();
        config.walls = walls.iter().map(|w| [w.from, w.to]).collect();
        config.eye = eye?;
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn sample_config() -> BoardConfig {
        BoardConfig {
            name: String::from("Shire"),
            width: 4,
            height: 3,
            eye: DirectedPosition::new(p(3, 2), Direction::West),
            start_fields: vec![
                DirectedPosition::new(p(2, 0), Direction::South),
                DirectedPosition::new(p(0, 1), Direction::East),
            ],
            check_points: vec![p(3, 0), p(1, 1), p(0, 2)],
            lembas_fields: vec![LembasField {
                position: p(1, 2),
                amount: 4,
            }],
            holes: vec![p(2, 2)],
            river_fields: vec![DirectedPosition::new(p(1, 0), Direction::North)],
            walls: vec![[p(1, 1), p(1, 2)], [p(3, 1), p(2, 1)]],
        }
    }

    #[test]
    fn json_uses_the_record_shape() {
        let json: serde_json::Value = serde_json::to_value(sample_config()).unwrap();

        assert_eq!(json["eye"]["position"], serde_json::json!([3, 2]));
        assert_eq!(json["eye"]["direction"], "WEST");
        assert_eq!(json["startFields"][1]["position"], serde_json::json!([0, 1]));
        assert_eq!(json["checkPoints"][2], serde_json::json!([0, 2]));
        assert_eq!(json["lembasFields"][0]["amount"], 4);
        assert_eq!(json["walls"][1], serde_json::json!([[3, 1], [2, 1]]));
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let json: &str = r#"{
            "name": "Bare",
            "width": 2,
            "height": 2,
            "eye": { "position": [1, 1], "direction": "SOUTH" },
            "startFields": [{ "position": [0, 0], "direction": "EAST" }],
            "checkPoints": [[1, 0]]
        }"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();

        assert!(config.lembas_fields.is_empty());
        assert!(config.holes.is_empty());
        assert!(config.river_fields.is_empty());
        assert!(config.walls.is_empty());
    }

    #[test]
    fn round_trip_through_the_grid() {
        let config: BoardConfig = sample_config();
        let grid: Grid = config.to_grid();
        let walls: WallMap = config.to_wall_map();
        let back: BoardConfig = BoardConfig::from_board(&config.name, &grid, &walls).unwrap();

        assert_eq!(back.width, config.width);
        assert_eq!(back.height, config.height);
        assert_eq!(back.eye, config.eye);
        assert_eq!(back.check_points, config.check_points);
        assert_eq!(back.walls, config.walls);

        let starts: HashSet<DirectedPosition> = back.start_fields.iter().copied().collect();
        assert_eq!(starts, config.start_fields.iter().copied().collect());
        let lembas: HashSet<LembasField> = back.lembas_fields.iter().copied().collect();
        assert_eq!(lembas, config.lembas_fields.iter().copied().collect());
        let holes: HashSet<Position> = back.holes.iter().copied().collect();
        assert_eq!(holes, config.holes.iter().copied().collect());
        let rivers: HashSet<DirectedPosition> = back.river_fields.iter().copied().collect();
        assert_eq!(rivers, config.river_fields.iter().copied().collect());
    }

    #[test]
    fn projection_skips_invalid_entries() {
        let mut config: BoardConfig = sample_config();
        config.holes.push(p(9, 9));
        config.walls.push([p(0, 0), p(2, 0)]);

        let grid: Grid = config.to_grid();
        assert_eq!(grid.get(p(9, 9)), None);
        assert_eq!(config.to_wall_map().len(), 2);
    }

    #[test]
    fn from_board_needs_an_eye() {
        assert!(BoardConfig::from_board("Empty", &Grid::new(2, 2), &WallMap::new()).is_none());
    }
}
