/*
validator.rs

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

//! Structural checks of a board configuration.
//!
//! These checks do not look at reachability (see [`crate::oracle`] for that).
//! They report features outside the board, cells used by several features, and invalid walls.

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::config::BoardConfig;
use super::position::Position;
use super::walls::WallMap;

/// Structural problem in a board configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("the board has no cell ({width}x{height})")]
    EmptyBoard { width: usize, height: usize },

    #[error("{feature} at {position} is outside the board")]
    OutOfBounds {
        feature: &'static str,
        position: Position,
    },

    #[error("{position} is used by both {first} and {second}")]
    DoubleOccupancy {
        position: Position,
        first: &'static str,
        second: &'static str,
    },

    #[error("wall {from}-{to} has a cell outside the board")]
    WallOutOfBounds { from: Position, to: Position },

    #[error("wall {from}-{to} is not between adjacent cells")]
    WallNotAdjacent { from: Position, to: Position },

    #[error("wall {from}-{to} is defined more than once")]
    DuplicateWall { from: Position, to: Position },
}

/// Check the structure of the given board configuration and return the list of problems.
///
/// An empty list means that the configuration is structurally sound.
pub fn validate(config: &BoardConfig) -> Vec<ConfigIssue> {
    let mut issues: Vec<ConfigIssue> = Vec::new();

    if config.width == 0 || config.height == 0 {
        issues.push(ConfigIssue::EmptyBoard {
            width: config.width,
            height: config.height,
        });
    }

    let in_bounds = |p: &Position| p.x < config.width && p.y < config.height;

    // Every feature that occupies a cell, with a label for the messages
    let mut features: Vec<(&'static str, Position)> = vec![("the eye", config.eye.position)];
    features.extend(config.start_fields.iter().map(|s| ("a start field", s.position)));
    features.extend(config.check_points.iter().map(|c| ("a checkpoint", *c)));
    features.extend(config.lembas_fields.iter().map(|l| ("a lembas field", l.position)));
    features.extend(config.holes.iter().map(|h| ("a hole", *h)));
    features.extend(config.river_fields.iter().map(|r| ("a river", r.position)));

    let mut occupied: HashMap<Position, &'static str> = HashMap::with_capacity(features.len());
    for (feature, position) in features {
        if !in_bounds(&position) {
            issues.push(ConfigIssue::OutOfBounds { feature, position });
            continue;
        }
        match occupied.get(&position) {
            Some(first) => issues.push(ConfigIssue::DoubleOccupancy {
                position,
                first: *first,
                second: feature,
            }),
            None => {
                occupied.insert(position, feature);
            }
        }
    }

    let mut seen: HashSet<(Position, Position)> = HashSet::with_capacity(config.walls.len());
    for [from, to] in &config.walls {
        let (from, to): (Position, Position) = (*from, *to);
        if !in_bounds(&from) || !in_bounds(&to) {
            issues.push(ConfigIssue::WallOutOfBounds { from, to });
            continue;
        }
        match WallMap::canonical_key(from, to) {
            None => issues.push(ConfigIssue::WallNotAdjacent { from, to }),
            Some(key) => {
                if !seen.insert(key) {
                    issues.push(ConfigIssue::DuplicateWall { from, to });
                }
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::config::{DirectedPosition, LembasField};
    use crate::board::position::Direction;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn config() -> BoardConfig {
        let mut c: BoardConfig =
            BoardConfig::new("Test", 3, 3, DirectedPosition::new(p(2, 2), Direction::North));
        c.start_fields = vec![
            DirectedPosition::new(p(0, 0), Direction::East),
            DirectedPosition::new(p(0, 2), Direction::East),
        ];
        c.check_points = vec![p(1, 1)];
        c
    }

    #[test]
    fn sound_configuration_has_no_issue() {
        let mut c: BoardConfig = config();
        c.walls.push([p(0, 1), p(1, 1)]);
        assert!(validate(&c).is_empty());
    }

    #[test]
    fn detects_double_occupancy() {
        let mut c: BoardConfig = config();
        c.lembas_fields.push(LembasField {
            position: p(1, 1),
            amount: 2,
        });

        assert_eq!(
            validate(&c),
            vec![ConfigIssue::DoubleOccupancy {
                position: p(1, 1),
                first: "a checkpoint",
                second: "a lembas field"
            }]
        );
    }

    #[test]
    fn detects_features_outside_the_board() {
        let mut c: BoardConfig = config();
        c.holes.push(p(3, 0));

        let issues: Vec<ConfigIssue> = validate(&c);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "a hole at (3, 0) is outside the board");
    }

    #[test]
    fn detects_invalid_walls() {
        let mut c: BoardConfig = config();
        c.walls = vec![
            [p(0, 0), p(1, 1)],
            [p(2, 2), p(2, 3)],
            [p(0, 0), p(1, 0)],
            [p(1, 0), p(0, 0)],
        ];

        assert_eq!(
            validate(&c),
            vec![
                ConfigIssue::WallNotAdjacent {
                    from: p(0, 0),
                    to: p(1, 1)
                },
                ConfigIssue::WallOutOfBounds {
                    from: p(2, 2),
                    to: p(2, 3)
                },
                ConfigIssue::DuplicateWall {
                    from: p(1, 0),
                    to: p(0, 0)
                },
            ]
        );
    }

    #[test]
    fn detects_empty_board() {
        let mut c: BoardConfig = config();
        c.width = 0;

        assert!(validate(&c).contains(&ConfigIssue::EmptyBoard {
            width: 0,
            height: 3
        }));
    }
}
