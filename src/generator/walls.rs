/*
walls.rs

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

//! Wall placement.
//!
//! Every candidate wall goes through the same steps: the walls are saved, the candidate is added,
//! and the oracle checks the board. The wall is kept if all the paths still exist, otherwise the
//! saved walls are restored. A candidate is never proposed twice.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use super::placer::FeaturePlacer;
use crate::board::config::BoardConfig;
use crate::board::grid::Grid;
use crate::board::position::{Direction, Position};
use crate::board::walls::{WallMap, WallSnapshot};

/// Probability that an edge gets a wall.
pub const WALL_DENSITY: f64 = 0.2;

/// Number of attempts per edge for the random algorithm.
pub const RANDOM_WALL_ATTEMPT_FACTOR: usize = 4;

/// Outcome of the wall placement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WallPlacement {
    /// Number of candidate walls checked by the oracle.
    pub proposed: usize,

    /// Number of walls added to the board.
    pub placed: usize,

    /// Number of edges drawn (random algorithm) or visited (iterative algorithm).
    pub attempts: usize,
}

/// Number of edges between adjacent cells.
pub fn total_edges(width: usize, height: usize) -> usize {
    width.saturating_sub(1) * height + height.saturating_sub(1) * width
}

/// Whether both cells are rivers.
fn between_rivers(grid: &Grid, a: Position, b: Position) -> bool {
    grid.get(a).is_some_and(|k| k.is_river()) && grid.get(b).is_some_and(|k| k.is_river())
}

/// Add the wall if the board stays solvable, and return whether the wall was kept.
fn propose<R: Rng>(
    placer: &mut FeaturePlacer<R>,
    grid: &Grid,
    walls: &mut WallMap,
    config: &mut BoardConfig,
    a: Position,
    b: Position,
    placement: &mut WallPlacement,
) -> bool {
    placement.proposed += 1;
    let snapshot: WallSnapshot = walls.snapshot();
    if !walls.add(a, b) {
        return false;
    }

    match placer.validate(config, grid, walls) {
        Ok(()) => {
            config.walls.push([a, b]);
            placement.placed += 1;
            debug!("Wall {a}-{b}");
            true
        }
        Err(pair) => {
            walls.restore(snapshot);
            debug!("Wall {a}-{b} rejected: {pair}");
            false
        }
    }
}

/// Visit every edge once, row by row, and propose a wall with a [`WALL_DENSITY`] probability.
///
/// For each cell only the east and south edges are visited, so that each edge is seen once.
pub fn place_walls_iterative<R: Rng>(
    placer: &mut FeaturePlacer<R>,
    grid: &Grid,
    walls: &mut WallMap,
    config: &mut BoardConfig,
) -> WallPlacement {
    let mut placement: WallPlacement = WallPlacement::default();

    for (pos, _) in grid.iter() {
        for direction in [Direction::East, Direction::South] {
            let Some(next) = pos.step(direction, grid.width(), grid.height()) else {
                continue;
            };
            placement.attempts += 1;
            if between_rivers(grid, pos, next) || !placer.chance(WALL_DENSITY) {
                continue;
            }
            propose(placer, grid, walls, config, pos, next, &mut placement);
        }
    }
    debug!(
        "Iterative walls: {} placed out of {} proposed",
        placement.placed, placement.proposed
    );
    placement
}

/// Draw random edges until `WALL_DENSITY * total_edges` walls are placed, or until
/// `RANDOM_WALL_ATTEMPT_FACTOR * total_edges` edges have been drawn.
pub fn place_walls_random<R: Rng>(
    placer: &mut FeaturePlacer<R>,
    grid: &Grid,
    walls: &mut WallMap,
    config: &mut BoardConfig,
) -> WallPlacement {
    let edges: usize = total_edges(grid.width(), grid.height());
    let target: usize = (edges as f64 * WALL_DENSITY).floor() as usize;
    let max_attempts: usize = RANDOM_WALL_ATTEMPT_FACTOR * edges;
    let mut tried: HashSet<(Position, Position)> = HashSet::with_capacity(edges);
    let mut placement: WallPlacement = WallPlacement::default();

    while placement.placed < target && placement.attempts < max_attempts {
        placement.attempts += 1;
        let Some(pos) = placer.random_position(grid) else {
            break;
        };
        let Some(next) = placer.random_neighbor(grid, pos) else {
            continue;
        };
        let Some(key) = WallMap::canonical_key(pos, next) else {
            continue;
        };
        if !tried.insert(key) || between_rivers(grid, pos, next) {
            continue;
        }
        propose(placer, grid, walls, config, pos, next, &mut placement);
    }
    debug!(
        "Random walls: {} placed out of {} targeted, {} attempts",
        placement.placed, target, placement.attempts
    );
    placement
}
