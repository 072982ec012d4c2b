/*
generator.rs

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

//! Generate random, solvable boards.
//!
//! A [`board_generator::BoardGenerator`] object creates boards from a
//! [`params::GenerationParams`] object.
//! The features are placed on grass cells by a [`placer::FeaturePlacer`] object, which also
//! draws the rivers (see [`rivers`]).
//! Holes and walls are placed by trial: each candidate is checked by the oracle
//! ([`crate::oracle`]) and rolled back if a start field, a lembas field, or a checkpoint can no
//! longer be reached from the first start field.
//!
//! The resulting board is returned as a [`board_generator::GeneratedBoard`] object, which holds
//! the cell matrix, the walls, and the serializable [`crate::board::config::BoardConfig`] record.

pub mod board_generator;
pub mod params;
pub mod placer;
pub mod rivers;
pub mod walls;

pub use board_generator::{BoardGenerator, GeneratedBoard, GenerationStats, GeneratorError};
pub use params::{GenerationParams, RiverAlgorithm, WallAlgorithm};
