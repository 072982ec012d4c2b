/*
board_generator.rs

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

//! Generate a random, solvable board.
//!
//! The features are placed in a fixed order: the eye, the start fields, the checkpoints, the
//! lembas fields, the holes, the rivers, and finally the walls.
//! Holes and walls are only kept if every start field, lembas field, and checkpoint can still be
//! reached from the first start field.

use log::{info, warn};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

use super::params::{GenerationParams, RiverAlgorithm, WallAlgorithm};
use super::placer::{FeaturePlacer, HolePlacement};
use super::walls::{self, WallPlacement};
use crate::board::config::{BoardConfig, DirectedPosition};
use crate::board::grid::Grid;
use crate::board::walls::WallMap;

/// Type of errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The board does not have enough cells for the requested features.
    #[error(
        "board too small for requested features: {required} cells required, {available} available"
    )]
    Capacity { required: usize, available: usize },
}

/// Statistics about the last generation run.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    pub holes_requested: usize,
    pub holes_placed: usize,
    pub hole_attempts: usize,
    pub rivers_requested: usize,
    pub rivers_placed: usize,
    pub walls_proposed: usize,
    pub walls_placed: usize,

    /// Number of reachability checks run by the oracle.
    pub validations: usize,
}

/// Generated board.
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub grid: Grid,
    pub walls: WallMap,
    pub config: BoardConfig,
}

/// [`BoardGenerator`] object.
pub struct BoardGenerator<R: Rng = ThreadRng> {
    /// Parameters of the boards to generate.
    params: GenerationParams,

    /// Random placement of the features.
    placer: FeaturePlacer<R>,

    /// Statistics about the last generated board.
    pub stats: GenerationStats,

    /// Duration in seconds it took to generate the last board.
    pub duration: f32,
}

impl BoardGenerator<ThreadRng> {
    /// Create the object. The boards are drawn from the thread-local random generator.
    pub fn new(params: GenerationParams) -> Self {
        Self::with_rng(params, rand::rng())
    }
}

impl<R: Rng> BoardGenerator<R> {
    /// Create the object with the given random generator.
    pub fn with_rng(params: GenerationParams, rng: R) -> Self {
        Self {
            params,
            placer: FeaturePlacer::new(rng),
            stats: GenerationStats::default(),
            duration: 0.0,
        }
    }

    /// Return the generation parameters.
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generate and return a random board.
    ///
    /// # Errors
    ///
    /// The method returns an error, before placing anything, if the board does not have enough
    /// cells for the eye, the start fields, the checkpoints, the lembas fields, and the holes.
    /// Fewer holes, rivers, or walls than requested is not an error: see [`BoardGenerator::stats`].
    pub fn generate(&mut self) -> Result<GeneratedBoard, GeneratorError> {
        let start: Instant = Instant::now();
        let params: GenerationParams = self.params.clone();
        // A board whose cell count overflows has no usable cell
        let capacity_error = GeneratorError::Capacity {
            required: params.required_cells().unwrap_or(usize::MAX),
            available: params.area().unwrap_or(0),
        };

        if !params.fits() {
            warn!("{capacity_error}");
            return Err(capacity_error);
        }

        self.stats = GenerationStats {
            holes_requested: params.hole_count,
            rivers_requested: params.rivers_to_place(),
            ..Default::default()
        };
        self.placer.validations = 0;

        let mut grid: Grid = Grid::new(params.width, params.height);
        let mut walls: WallMap = WallMap::new();

        // Eye
        let eye: DirectedPosition = self.placer.place_eye(&mut grid).ok_or(capacity_error)?;
        let mut config: BoardConfig = BoardConfig::new(&params.name, params.width, params.height, eye);

        // Start fields, checkpoints, and lembas fields. The capacity check guarantees a grass
        // cell for each of them.
        for _ in 0..params.start_field_count {
            self.placer.place_start(&mut grid, &mut config);
        }
        for _ in 0..params.checkpoint_count {
            self.placer.place_checkpoint(&mut grid, &mut config);
        }
        for _ in 0..params.lembas_field_count {
            self.placer.place_lembas(
                &mut grid,
                &mut config,
                params.max_lembas_amount,
                params.exact_lembas_amount,
            );
        }

        // Holes
        if params.hole_count > 0 {
            let holes: HolePlacement =
                self.placer
                    .place_holes(&mut grid, &walls, &mut config, params.hole_count);
            self.stats.holes_placed = holes.placed;
            self.stats.hole_attempts = holes.attempts;
        }

        // Rivers
        let rivers: usize = params.rivers_to_place();
        if rivers > 0 {
            self.stats.rivers_placed = match params.river_algorithm {
                RiverAlgorithm::Default => {
                    self.placer
                        .place_rivers_default(&mut grid, &mut config, rivers)
                }
                RiverAlgorithm::Complex => {
                    self.placer
                        .place_rivers_complex(&mut grid, &mut config, rivers)
                }
            };
        }

        // Walls
        if params.want_walls {
            let placement: WallPlacement = match params.wall_algorithm {
                WallAlgorithm::Iterative => {
                    walls::place_walls_iterative(&mut self.placer, &grid, &mut walls, &mut config)
                }
                WallAlgorithm::Random => {
                    walls::place_walls_random(&mut self.placer, &grid, &mut walls, &mut config)
                }
            };
            self.stats.walls_proposed = placement.proposed;
            self.stats.walls_placed = placement.placed;
        }

        self.stats.validations = self.placer.validations;
        self.duration = start.elapsed().as_secs_f32();
        info!(
            "Board \"{}\" ({}x{}) generated in {}s: {}/{} holes, {}/{} rivers, {} walls, {} checks",
            params.name,
            params.width,
            params.height,
            self.duration,
            self.stats.holes_placed,
            self.stats.holes_requested,
            self.stats.rivers_placed,
            self.stats.rivers_requested,
            self.stats.walls_placed,
            self.stats.validations
        );
        grid.debug();

        Ok(GeneratedBoard {
            grid,
            walls,
            config,
        })
    }
}
