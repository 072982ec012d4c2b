/*
board.rs

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

//! Board representation.
//!
//! A board is made of two parts:
//!
//! * A [`grid::Grid`] object that stores the content of every cell, as a [`cell::CellKind`].
//! * A [`walls::WallMap`] object that stores the walls. A wall blocks the edge between two
//!   adjacent cells.
//!
//! The [`config::BoardConfig`] object is the serializable form of a board.
//! Use [`config::BoardConfig::to_grid`] and [`config::BoardConfig::to_wall_map`] to build the two
//! parts from a configuration, and [`config::BoardConfig::from_board`] for the reverse operation.
//! The [`validator`] module checks the structure of a configuration.

pub mod cell;
pub mod config;
pub mod grid;
pub mod position;
pub mod validator;
pub mod walls;
