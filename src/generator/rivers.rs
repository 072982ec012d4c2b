/*
rivers.rs

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

//! River placement.
//!
//! Rivers can be crossed, so they never need a reachability check.
//! Two algorithms are available:
//!
//! * The default algorithm scatters single river cells. A cell becomes a river only if at least
//!   three of its neighbors are grass, which keeps the rivers apart.
//! * The complex algorithm draws snake-shaped rivers. Each river cell flows into the next one, and
//!   a river never flows back into the cell it comes from.

use log::debug;
use rand::Rng;

use super::placer::FeaturePlacer;
use crate::board::cell::CellKind;
use crate::board::config::{BoardConfig, DirectedPosition};
use crate::board::grid::Grid;
use crate::board::position::{Direction, Position};

/// Minimum number of grass neighbors for a cell to become a scattered river, or the source of a
/// river chain.
pub const RIVER_SPACING: usize = 3;

/// Number of attempts per board cell when scattering rivers.
pub const RIVER_ATTEMPT_FACTOR: usize = 8;

impl<R: Rng> FeaturePlacer<R> {
    /// Write a river cell on the grid and in the configuration.
    fn put_river(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
        pos: Position,
        direction: Direction,
    ) {
        grid.set(pos, CellKind::River(direction));
        config
            .river_fields
            .push(DirectedPosition::new(pos, direction));
    }

    /// Scatter up to `count` single river cells and return the number of cells placed.
    pub fn place_rivers_default(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
        count: usize,
    ) -> usize {
        let max_attempts: usize = RIVER_ATTEMPT_FACTOR * grid.area();
        let mut placed: usize = 0;
        let mut attempts: usize = 0;

        while placed < count && attempts < max_attempts {
            attempts += 1;
            let Some(pos) = self.random_free_position(grid) else {
                break;
            };
            if grid.free_neighbors(pos) < RIVER_SPACING {
                continue;
            }
            let direction: Direction = self.random_direction();
            self.put_river(grid, config, pos, direction);
            placed += 1;
        }
        debug!("{placed} river cells out of {count} scattered in {attempts} attempts");
        placed
    }

    /// Return the first cell of a river chain: preferably a grass cell with enough grass around,
    /// otherwise any grass cell.
    fn river_source(&mut self, grid: &Grid) -> Option<Position> {
        for _ in 0..grid.area() {
            let pos: Position = self.random_free_position(grid)?;
            if grid.free_neighbors(pos) >= RIVER_SPACING {
                return Some(pos);
            }
        }
        self.random_free_position(grid)
    }

    /// Draw snake-shaped rivers until `count` river cells are placed or the board is full, and
    /// return the number of cells placed.
    pub fn place_rivers_complex(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
        count: usize,
    ) -> usize {
        let mut placed: usize = 0;
        let mut chains: usize = 0;

        while placed < count {
            match self.place_river_chain(grid, config, count - placed) {
                Some(n) => {
                    placed += n;
                    chains += 1;
                }
                None => {
                    debug!("No grass cell left for rivers");
                    break;
                }
            }
        }
        debug!("{placed} river cells out of {count} placed in {chains} rivers");
        placed
    }

    /// Return a random direction that does not point back to the cell the river comes from.
    fn river_direction(&mut self, previous: Option<Direction>) -> Direction {
        let direction: Direction = self.random_direction();
        match previous {
            Some(d) if direction == d.opposite() => {
                let choices: [Direction; 2] = d.perpendicular();
                choices[self.rng().random_range(0..2)]
            }
            _ => direction,
        }
    }

    /// Return a random direction toward a grass neighbor, with the cell in that direction.
    ///
    /// The previous river cell is not grass, so the river never flows back.
    /// Return None if the cell has no grass neighbor.
    fn flowing_direction(&mut self, grid: &Grid, pos: Position) -> Option<(Direction, Position)> {
        let choices: Vec<(Direction, Position)> = grid
            .neighbors4(pos)
            .into_iter()
            .filter(|(_, p)| grid.is_free(*p))
            .collect();
        if choices.is_empty() {
            return None;
        }
        Some(choices[self.rng().random_range(0..choices.len())])
    }

    /// Draw one river of at most `max_cells` cells and return its length, or None if there is no
    /// grass cell left.
    ///
    /// The river is between two and `min(width, height)` cells long. It is shorter only when its
    /// last cell has no grass neighbor left.
    fn place_river_chain(
        &mut self,
        grid: &mut Grid,
        config: &mut BoardConfig,
        max_cells: usize,
    ) -> Option<usize> {
        let mut pos: Position = self.river_source(grid)?;
        let max_length: usize = grid.width().min(grid.height());
        let length: usize = if max_length >= 2 {
            self.rng().random_range(2..=max_length)
        } else {
            1
        };
        let length: usize = length.min(max_cells);
        let mut previous: Option<Direction> = None;
        let mut chain_length: usize = 0;

        loop {
            // The next cell is the one the river flows into
            let flow: Option<(Direction, Position)> = if chain_length + 1 < length {
                self.flowing_direction(grid, pos)
            } else {
                None
            };
            let direction: Direction = match flow {
                Some((d, _)) => d,
                None => self.river_direction(previous),
            };
            self.put_river(grid, config, pos, direction);
            chain_length += 1;

            let Some((_, next)) = flow else {
                break;
            };
            previous = Some(direction);
            pos = next;
        }
        Some(chain_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(width: usize, height: usize, seed: u64) -> (Grid, BoardConfig, FeaturePlacer<StdRng>) {
        let mut grid: Grid = Grid::new(width, height);
        let mut placer: FeaturePlacer<StdRng> = FeaturePlacer::new(StdRng::seed_from_u64(seed));
        let eye: DirectedPosition = placer.place_eye(&mut grid).unwrap();
        let config: BoardConfig = BoardConfig::new("Rivers", width, height, eye);
        (grid, config, placer)
    }

    #[test]
    fn scattered_rivers_only_use_grass_cells() {
        let (mut grid, mut config, mut placer) = setup(8, 8, 11);
        placer.place_start(&mut grid, &mut config);
        let start: Position = config.start_fields[0].position;

        let placed: usize = placer.place_rivers_default(&mut grid, &mut config, 6);

        assert!(placed <= 6);
        assert_eq!(placed, config.river_fields.len());
        for r in &config.river_fields {
            assert_eq!(grid.get(r.position), Some(CellKind::River(r.direction)));
        }
        assert!(matches!(grid.get(start), Some(CellKind::Start(_))));
    }

    #[test]
    fn scattering_stops_when_no_cell_is_spaced_enough() {
        // In a single row no cell has three neighbors
        let (mut grid, mut config, mut placer) = setup(6, 1, 12);

        assert_eq!(placer.place_rivers_default(&mut grid, &mut config, 3), 0);
    }

    #[test]
    fn river_chains_never_flow_back() {
        for seed in 0..20 {
            let (mut grid, mut config, mut placer) = setup(10, 10, seed);
            let mut first: usize = 0;

            while let Some(n) = placer.place_river_chain(&mut grid, &mut config, 50) {
                let chain: &[DirectedPosition] = &config.river_fields[first..first + n];

                // A chain is cut short only when it is stuck
                assert!(n <= 10);
                if n == 1 {
                    assert_eq!(grid.free_neighbors(chain[0].position), 0);
                }

                // Each cell flows into the next one, never back into the previous one
                for w in chain.windows(2) {
                    assert_eq!(w[0].position.step(w[0].direction, 10, 10), Some(w[1].position));
                    assert_ne!(w[1].direction, w[0].direction.opposite());
                }
                first += n;
            }
            assert_eq!(grid.free_count(), 0);
        }
    }

    #[test]
    fn river_chains_have_at_least_two_cells() {
        for seed in 0..200 {
            let (mut grid, mut config, mut placer) = setup(10, 10, seed);

            let n: usize = placer.place_river_chain(&mut grid, &mut config, 10).unwrap();
            assert!((2..=10).contains(&n), "seed {seed}: chain of {n} cells");
        }
    }

    #[test]
    fn single_row_chains_have_one_cell() {
        let (mut grid, mut config, mut placer) = setup(6, 1, 14);

        assert_eq!(placer.place_river_chain(&mut grid, &mut config, 10), Some(1));
    }

    #[test]
    fn complex_rivers_place_the_requested_count() {
        let (mut grid, mut config, mut placer) = setup(10, 10, 21);

        assert_eq!(placer.place_rivers_complex(&mut grid, &mut config, 30), 30);
        assert_eq!(config.river_fields.len(), 30);
        assert_eq!(grid.free_count(), 99 - 30);
    }

    #[test]
    fn river_chains_stop_when_the_board_is_full() {
        let (mut grid, mut config, mut placer) = setup(3, 3, 13);

        let placed: usize = placer.place_rivers_complex(&mut grid, &mut config, 100);

        assert_eq!(placed, 8);
        assert_eq!(grid.free_count(), 0);
    }
}
