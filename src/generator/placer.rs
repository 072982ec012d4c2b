/*
placer.rs

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

//! Random placement of the board features.
//!
//! Every feature is placed on a grass cell drawn at random: cells are drawn until a free one comes
//! up (rejection sampling).
//! Holes are the only features that can cut the board in pieces. Each candidate hole is written
//! on a copy of the grid and kept only if the oracle still finds all the paths.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use crate::board::cell::CellKind;
use crate::board::config::{BoardConfig, DirectedPosition, LembasField};
use crate::board::grid::Grid;
use crate::board::position::{Direction, Position};
use crate::board::walls::WallMap;
use crate::oracle::reachability::{UnreachablePair, path_possible_for};

/// Number of attempts per board cell when placing holes.
pub const HOLE_ATTEMPT_FACTOR: usize = 8;

/// Outcome of the hole placement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HolePlacement {
    /// Number of holes added to the board.
    pub placed: usize,

    /// Number of candidate cells tested.
    pub attempts: usize,
}

/// Place features at random positions.
pub struct FeaturePlacer<R: Rng> {
    rng: R,

    /// Number of reachability checks run since the object was created or reset.
    pub validations: usize,
}

impl<R: Rng> FeaturePlacer<R> {
    /// Create a [`FeaturePlacer`] object that draws from the given random generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            validations: 0,
        }
    }

    /// Return the random generator.
    pub(crate) fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Whether an event of the given probability happens.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }

    /// Return a random direction.
    pub fn random_direction(&mut self) -> Direction {
        Direction::from_repr(self.rng.random_range(0..4)).unwrap_or_default()
    }

    /// Return a random position on the grid, whatever the content of the cell.
    ///
    /// Return None if the grid has no cell.
    pub fn random_position(&mut self, grid: &Grid) -> Option<Position> {
        if grid.area() == 0 {
            return None;
        }
        Some(Position::new(
            self.rng.random_range(0..grid.width()),
            self.rng.random_range(0..grid.height()),
        ))
    }

    /// Return a random neighbor of the given cell, inside the grid.
    pub fn random_neighbor(&mut self, grid: &Grid, pos: Position) -> Option<Position> {
        let neighbors: Vec<(Direction, Position)> = grid.neighbors4(pos);
        if neighbors.is_empty() {
            return None;
        }
        Some(neighbors[self.rng.random_range(0..neighbors.len())].1)
    }

    /// Return a random grass cell, or None if there are none left.
    pub fn random_free_position(&mut self, grid: &Grid) -> Option<Position> {
        self.random_free_position_except(grid, &HashSet::new())
    }

    /// Return a random grass cell that is not in `excluded`, or None if there is no such cell.
    pub fn random_free_position_except(
        &mut self,
        grid: &Grid,
        excluded: &HashSet<Position>,
    ) -> Option<Position> {
        if !grid
            .iter()
            .any(|(p, k)| k == CellKind::Grass && !excluded.contains(&p))
        {
            return None;
        }
        loop {
            let pos: Position = self.random_position(grid)?;
            if grid.is_free(pos) && !excluded.contains(&pos) {
                return Some(pos);
            }
        }
    }

    /// Run the reachability check for the features of the configuration.
    pub fn validate(
        &mut self,
        config: &BoardConfig,
        grid: &Grid,
        walls: &WallMap,
    ) -> Result<(), UnreachablePair> {
        self.validations += 1;
        path_possible_for(config, grid, walls)
    }

    /// Return a random grass cell where the eye does not cut the board in two.
    ///
    /// Boards with at least two rows and two columns have no such cut cell. On a single row or
    /// column, only the two end cells are safe.
    fn random_eye_position(&mut self, grid: &Grid) -> Option<Position> {
        if grid.width() > 1 && grid.height() > 1 {
            return self.random_free_position(grid);
        }
        let last: Position =
            Position::new(grid.width().saturating_sub(1), grid.height().saturating_sub(1));
        let ends: Vec<Position> = [Position::new(0, 0), last]
            .into_iter()
            .filter(|p| grid.is_free(*p))
            .collect();
        if ends.is_empty() {
            return None;
        }
        Some(ends[self.rng.random_range(0..ends.len())])
    }

    /// Place the eye on a random grass cell, facing a random direction.
    ///
    /// The eye cannot be crossed, so it is never placed on a cell that splits the board.
    pub fn place_eye(&mut self, grid: &mut Grid) -> Option<DirectedPosition> {
        let pos: Position = self.random_eye_position(grid)?;
        let direction: Direction = self.random_direction();

        grid.set(pos, CellKind::Eye(direction));
        debug!("Eye at {pos} facing {direction}");
        Some(DirectedPosition::new(pos, direction))
    }

    /// Place a start field on a random grass cell, facing a random direction.
    pub fn place_start(&mut self, grid: &mut Grid, config: &mut BoardConfig) -> Option<Position> {
        let pos: Position = self.random_free_position(grid)?;
        let direction: Direction = self.random_direction();

        grid.set(pos, CellKind::Start(direction));
        config
            .start_fields
            .push(DirectedPosition::new(pos, direction));
        debug!("Start field at {pos} facing {direction}");
        Some(pos)
    }

    /// Place the next checkpoint on a random grass cell.
    ///
    /// Checkpoints are numbered from zero in the order they are placed.
    pub fn place_checkpoint(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
    ) -> Option<Position> {
        let pos: Position = self.random_free_position(grid)?;
        let order: usize = config.check_points.len();

        grid.set(pos, CellKind::Checkpoint(order));
        config.check_points.push(pos);
        debug!("Checkpoint {order} at {pos}");
        Some(pos)
    }

    /// Place a lembas field on a random grass cell.
    ///
    /// The field holds `max_amount` lembas when `exact` is set, otherwise a random amount between
    /// zero and `max_amount`.
    pub fn place_lembas(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
        max_amount: u32,
        exact: bool,
    ) -> Option<Position> {
        let pos: Position = self.random_free_position(grid)?;
        let amount: u32 = if exact {
            max_amount
        } else {
            self.rng.random_range(0..=max_amount)
        };

        grid.set(pos, CellKind::Lembas(amount));
        config.lembas_fields.push(LembasField {
            position: pos,
            amount,
        });
        debug!("Lembas field at {pos} with {amount} lembas");
        Some(pos)
    }

    /// Place up to `count` holes without cutting any path between the features.
    ///
    /// A cell is tested at most once. The search gives up after
    /// `HOLE_ATTEMPT_FACTOR * width * height` attempts or when no untested grass cell is left, so
    /// fewer holes than requested might be placed.
    pub fn place_holes(
        &mut self,
        grid: &mut Grid,
        walls: &WallMap,
        config: &mut BoardConfig,
        count: usize,
    ) -> HolePlacement {
        let max_attempts: usize = HOLE_ATTEMPT_FACTOR * grid.area();
        let mut tried: HashSet<Position> = HashSet::new();
        let mut placement: HolePlacement = HolePlacement::default();

        while placement.placed < count && placement.attempts < max_attempts {
            let Some(pos) = self.random_free_position_except(grid, &tried) else {
                debug!("No more candidate cell for holes");
                break;
            };
            placement.attempts += 1;
            tried.insert(pos);

            // Try the hole on a copy so that the board is never modified by a rejected hole
            let mut trial: Grid = grid.clone();
            trial.set(pos, CellKind::Hole);
            match self.validate(config, &trial, walls) {
                Ok(()) => {
                    grid.set(pos, CellKind::Hole);
                    config.holes.push(pos);
                    placement.placed += 1;
                    debug!("Hole at {pos}");
                }
                Err(pair) => debug!("Hole at {pos} rejected: {pair}"),
            }
        }

        if placement.placed < count {
            debug!(
                "Only {} holes out of {count} placed after {} attempts",
                placement.placed, placement.attempts
            );
        }
        placement
    }
}
