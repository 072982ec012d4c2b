/*
lib.rs

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

//! Random board generator for a grid-based racing game.
//!
//! The players move their figures from their start field through an ordered list of checkpoints,
//! avoiding holes, walls, and the Eye of Sauron, and crossing rivers.
//! This crate generates random boards that are guaranteed to be solvable:
//!
//! * [`board`] defines the board model: positions, cells, the cell matrix, the walls, and the
//!   serializable [`board::config::BoardConfig`] record.
//! * [`oracle`] answers "can every feature still be reached?" by running an A* search.
//! * [`generator`] places the features at random and rolls back any hole or wall that would make
//!   the board unsolvable.
//! * [`saver`] loads and saves boards and generation parameters in JSON format.
//!
//! # Example:
//!
//! ```
//! use board_generator::generator::{BoardGenerator, GenerationParams};
//! use board_generator::oracle::check_board_config;
//!
//! let params: GenerationParams = GenerationParams {
//!     hole_count: 6,
//!     want_walls: true,
//!     ..Default::default()
//! };
//! let mut generator = BoardGenerator::new(params);
//! let board = generator.generate().unwrap();
//!
//! assert!(check_board_config(&board.config).is_reachable());
//! ```

pub mod board;
pub mod generator;
pub mod oracle;
pub mod saver;
