/*
reachability.rs

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

//! Reachability checks between the features of a board.

use log::debug;
use serde::Serialize;
use std::fmt;

use super::search::search;
use crate::board::config::BoardConfig;
use crate::board::grid::Grid;
use crate::board::position::Position;
use crate::board::walls::WallMap;

/// Pair of cells with no path between them.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UnreachablePair {
    pub start: Position,
    pub end: Position,
}

impl fmt::Display for UnreachablePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no path from {} to {}", self.start, self.end)
    }
}

/// Result of an exhaustive reachability check.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ReachabilityReport {
    /// Pairs of cells with no path between them.
    pub failing_pairs: Vec<UnreachablePair>,
}

impl ReachabilityReport {
    /// Whether all the checked pairs are connected.
    pub fn is_reachable(&self) -> bool {
        self.failing_pairs.is_empty()
    }
}

/// Whether there is a path between the two cells.
fn connected(start: Position, end: Position, grid: &Grid, walls: &WallMap) -> bool {
    !search(start, end, grid, walls).is_empty()
}

/// Verify that every start field, lembas field, and checkpoint can be reached from the first
/// start field (the hub).
///
/// The check stops at the first failure.
/// Because steps are reversible, reaching everything from the hub also means that all these
/// cells are reachable from each other.
///
/// # Errors
///
/// Return the first pair of cells with no path between them.
pub fn path_possible(
    checkpoints: &[Position],
    start_fields: &[Position],
    lembas_fields: &[Position],
    grid: &Grid,
    walls: &WallMap,
) -> Result<(), UnreachablePair> {
    let Some(hub) = start_fields.first() else {
        return Ok(());
    };

    for end in start_fields[1..]
        .iter()
        .chain(lembas_fields.iter())
        .chain(checkpoints.iter())
    {
        if !connected(*hub, *end, grid, walls) {
            debug!("Unreachable: {hub} -> {end}");
            return Err(UnreachablePair {
                start: *hub,
                end: *end,
            });
        }
    }
    Ok(())
}

/// Run [`path_possible`] for the features listed in a board configuration, against the given
/// cells and walls.
pub fn path_possible_for(
    config: &BoardConfig,
    grid: &Grid,
    walls: &WallMap,
) -> Result<(), UnreachablePair> {
    path_possible(
        &config.check_points,
        &config.start_positions(),
        &config.lembas_positions(),
        grid,
        walls,
    )
}

/// Verify that every checkpoint can be reached from every start field, and collect all the
/// failures.
pub fn path_possible_all(
    checkpoints: &[Position],
    start_fields: &[Position],
    grid: &Grid,
    walls: &WallMap,
) -> ReachabilityReport {
    let mut report: ReachabilityReport = ReachabilityReport::default();

    for start in start_fields {
        for end in checkpoints {
            if !connected(*start, *end, grid, walls) {
                report.failing_pairs.push(UnreachablePair {
                    start: *start,
                    end: *end,
                });
            }
        }
    }
    debug!(
        "Exhaustive check: {} start fields x {} checkpoints, {} failures",
        start_fields.len(),
        checkpoints.len(),
        report.failing_pairs.len()
    );
    report
}

/// Verify that every checkpoint of the board configuration can be reached from every start
/// field.
pub fn check_board_config(config: &BoardConfig) -> ReachabilityReport {
    let grid: Grid = config.to_grid();
    let walls: WallMap = config.to_wall_map();

    path_possible_all(&config.check_points, &config.start_positions(), &grid, &walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell::CellKind;
    use crate::board::config::DirectedPosition;
    use crate::board::position::Direction;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn no_start_field_is_trivially_reachable() {
        let grid: Grid = Grid::new(2, 2);
        assert_eq!(path_possible(&[p(1, 1)], &[], &[], &grid, &WallMap::new()), Ok(()));
    }

    #[test]
    fn reports_the_first_unreachable_pair() {
        let mut grid: Grid = Grid::new(3, 3);
        grid.set(p(2, 1), CellKind::Hole);
        grid.set(p(1, 2), CellKind::Hole);
        let starts: [Position; 2] = [p(0, 0), p(1, 0)];
        let lembas: [Position; 1] = [p(2, 2)];
        let checkpoints: [Position; 1] = [p(0, 2)];

        assert_eq!(
            path_possible(&checkpoints, &starts, &lembas, &grid, &WallMap::new()),
            Err(UnreachablePair {
                start: p(0, 0),
                end: p(2, 2)
            })
        );
    }

    #[test]
    fn exhaustive_check_collects_all_failures() {
        let mut grid: Grid = Grid::new(3, 2);
        grid.set(p(1, 0), CellKind::Hole);
        let mut walls: WallMap = WallMap::new();
        walls.add(p(0, 1), p(1, 1));

        let report: ReachabilityReport =
            path_possible_all(&[p(0, 0), p(2, 1)], &[p(0, 1), p(2, 0)], &grid, &walls);

        assert!(!report.is_reachable());
        assert_eq!(
            report.failing_pairs,
            vec![
                UnreachablePair {
                    start: p(0, 1),
                    end: p(2, 1)
                },
                UnreachablePair {
                    start: p(2, 0),
                    end: p(0, 0)
                },
            ]
        );
    }

    #[test]
    fn check_board_config_uses_the_configuration() {
        let mut config: BoardConfig =
            BoardConfig::new("Test", 3, 1, DirectedPosition::new(p(1, 0), Direction::North));
        config.start_fields = vec![DirectedPosition::new(p(0, 0), Direction::East)];
        config.check_points = vec![p(2, 0)];

        let report: ReachabilityReport = check_board_config(&config);
        assert_eq!(report.failing_pairs.len(), 1);
        assert_eq!(
            report.failing_pairs[0].to_string(),
            "no path from (0, 0) to (2, 0)"
        );

        config.eye.position = p(0, 0);
        config.start_fields = vec![DirectedPosition::new(p(1, 0), Direction::East)];
        assert!(check_board_config(&config).is_reachable());
    }
}
