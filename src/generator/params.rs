/*
params.rs

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

//! Board generation parameters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm used to place the rivers.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiverAlgorithm {
    /// Scattered single-cell rivers.
    #[default]
    Default,

    /// Snake-shaped chains of river cells.
    Complex,
}

impl fmt::Display for RiverAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RiverAlgorithm::Default => write!(f, "default"),
            RiverAlgorithm::Complex => write!(f, "complex"),
        }
    }
}

/// Algorithm used to place the walls.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum WallAlgorithm {
    /// Sweep every edge of the board once.
    #[default]
    Iterative,

    /// Draw random edges until the target number of walls is reached.
    Random,
}

impl fmt::Display for WallAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WallAlgorithm::Iterative => write!(f, "iterative"),
            WallAlgorithm::Random => write!(f, "random"),
        }
    }
}

/// Parameters of a generation run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationParams {
    /// Name of the board.
    pub name: String,

    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    pub start_field_count: usize,
    pub checkpoint_count: usize,
    pub lembas_field_count: usize,

    /// Maximum number of lembas on a lembas field.
    pub max_lembas_amount: u32,

    /// Whether every lembas field holds exactly [`GenerationParams::max_lembas_amount`] lembas,
    /// instead of a random amount between zero and that maximum.
    pub exact_lembas_amount: bool,

    pub want_rivers: bool,
    pub river_algorithm: RiverAlgorithm,

    /// Number of river cells. When not set, one cell out of eight becomes a river.
    pub river_count: Option<usize>,

    pub hole_count: usize,
    pub want_walls: bool,
    pub wall_algorithm: WallAlgorithm,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            name: String::from("Random board"),
            width: 10,
            height: 10,
            start_field_count: 2,
            checkpoint_count: 3,
            lembas_field_count: 0,
            max_lembas_amount: 5,
            exact_lembas_amount: false,
            want_rivers: false,
            river_algorithm: RiverAlgorithm::Default,
            river_count: None,
            hole_count: 0,
            want_walls: false,
            wall_algorithm: WallAlgorithm::Iterative,
        }
    }
}

impl GenerationParams {
    /// Number of cells needed by the features that cannot share a cell (the eye included).
    ///
    /// Return None if the count overflows.
    pub fn required_cells(&self) -> Option<usize> {
        self.start_field_count
            .checked_add(self.checkpoint_count)?
            .checked_add(self.lembas_field_count)?
            .checked_add(self.hole_count)?
            .checked_add(1)
    }

    /// Number of cells of the board.
    ///
    /// Return None if the count overflows.
    pub fn area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Whether the board has enough cells for the features.
    pub fn fits(&self) -> bool {
        matches!(
            (self.required_cells(), self.area()),
            (Some(required), Some(area)) if required <= area
        )
    }

    /// Number of river cells to place, zero if rivers are not wanted.
    pub fn rivers_to_place(&self) -> usize {
        if !self.want_rivers {
            return 0;
        }
        self.river_count
            .unwrap_or(self.area().map_or(0, |area| area / 8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_cells_counts_the_eye() {
        let params: GenerationParams = GenerationParams {
            start_field_count: 2,
            checkpoint_count: 3,
            lembas_field_count: 4,
            hole_count: 5,
            ..Default::default()
        };
        assert_eq!(params.required_cells(), Some(15));
        assert!(params.fits());
    }

    #[test]
    fn overflowing_counts_never_fit() {
        let wide: GenerationParams = GenerationParams {
            width: usize::MAX,
            height: 2,
            ..Default::default()
        };
        assert_eq!(wide.area(), None);
        assert!(!wide.fits());

        let holes: GenerationParams = GenerationParams {
            hole_count: usize::MAX,
            ..Default::default()
        };
        assert_eq!(holes.required_cells(), None);
        assert!(!holes.fits());
    }

    #[test]
    fn river_count_defaults_to_an_eighth_of_the_board() {
        let mut params: GenerationParams = GenerationParams {
            width: 8,
            height: 5,
            ..Default::default()
        };
        assert_eq!(params.rivers_to_place(), 0);

        params.want_rivers = true;
        assert_eq!(params.rivers_to_place(), 5);

        params.river_count = Some(2);
        assert_eq!(params.rivers_to_place(), 2);
    }

    #[test]
    fn missing_json_fields_take_default_values() {
        let params: GenerationParams =
            serde_json::from_str(r#"{ "name": "Mordor", "width": 6, "wallAlgorithm": "random" }"#)
                .unwrap();

        assert_eq!(params.name, "Mordor");
        assert_eq!(params.width, 6);
        assert_eq!(params.height, 10);
        assert_eq!(params.wall_algorithm, WallAlgorithm::Random);
        assert_eq!(params.river_algorithm, RiverAlgorithm::Default);
    }
}
