/*
oracle.rs

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

//! Reachability oracle.
//!
//! The oracle answers whether the features of a board are connected:
//!
//! * [`search::search`] finds a path between two cells with a heuristic A* search, going around
//!   holes, the eye, and walls.
//! * [`reachability::path_possible`] verifies that every start field, lembas field, and checkpoint
//!   can be reached from the first start field. The generator calls it for every tentative hole
//!   and wall.
//! * [`reachability::path_possible_all`] and [`reachability::check_board_config`] check every
//!   start field against every checkpoint and return all the failures. They are used to validate
//!   a board after it has been loaded or edited.

pub mod line;
pub mod reachability;
pub mod search;

pub use reachability::{
    ReachabilityReport, UnreachablePair, check_board_config, path_possible, path_possible_all,
};
pub use search::search;
