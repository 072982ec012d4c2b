/*
search.rs

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

//! Heuristic path search between two cells.
//!
//! The search is an A* variant. Its heuristic adds to the Euclidean distance a penalty for every
//! cell on the straight line to the goal that is neither the eye nor a river, which drives the
//! search away from cluttered lines.
//! The heuristic is not admissible: the returned path is a path, not the shortest one.
//! Callers only need to know whether a path exists.

use log::{Level, debug, log_enabled};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::line;
use crate::board::cell::CellKind;
use crate::board::grid::Grid;
use crate::board::position::Position;
use crate::board::walls::WallMap;

/// Weight of each obstructed cell on the straight line to the goal.
const OBSTRUCTION_WEIGHT: f64 = 10.0;

/// Entry in the search frontier.
#[derive(Debug, Clone, Copy)]
struct FrontierNode {
    /// Cell to explore.
    state: Position,

    /// Number of steps from the start cell.
    cost: usize,

    /// Cost plus heuristic.
    estimate: f64,
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// [`std::collections::BinaryHeap`] is a max-heap: the comparison is reversed so that the node
/// with the smallest estimate is popped first.
impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// Number of cells on the straight line between `state` and `goal` that are neither the eye nor
/// a river.
pub fn obstruction_penalty(state: Position, goal: Position, grid: &Grid) -> usize {
    line::bresenham(state, goal)
        .iter()
        .filter(|p| !matches!(grid.get(**p), Some(CellKind::Eye(_)) | Some(CellKind::River(_))))
        .count()
}

/// Search heuristic.
pub fn heuristic(state: Position, goal: Position, grid: &Grid) -> f64 {
    state.euclidean(goal) + OBSTRUCTION_WEIGHT * obstruction_penalty(state, goal, grid) as f64
}

/// Return the cells reachable in one step from `state`.
///
/// A step goes to a cell north, east, south, or west, inside the grid, that is neither the eye nor
/// a hole, and with no wall in between.
pub fn steps(state: Position, grid: &Grid, walls: &WallMap) -> Vec<Position> {
    grid.neighbors4(state)
        .into_iter()
        .filter(|(_, p)| grid.get(*p).is_some_and(|k| k.is_walkable()))
        .filter(|(_, p)| !walls.contains(state, *p))
        .map(|(_, p)| p)
        .collect()
}

/// Search a path from `start` to `goal`.
///
/// Return the path, both ends included, or an empty vector if `goal` cannot be reached.
pub fn search(start: Position, goal: Position, grid: &Grid, walls: &WallMap) -> Vec<Position> {
    if !grid.contains(start) || !grid.contains(goal) {
        debug!("Search {start} -> {goal}: outside the {}x{} grid", grid.width(), grid.height());
        return Vec::new();
    }

    let width: usize = grid.width();
    let index = |p: Position| p.y * width + p.x;

    // A cell is discovered when it enters the frontier, and is never queued again
    let mut discovered: Vec<bool> = vec![false; grid.area()];
    let mut came_from: Vec<Option<Position>> = vec![None; grid.area()];
    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    let mut explored: usize = 0;

    discovered[index(start)] = true;
    frontier.push(FrontierNode {
        state: start,
        cost: 0,
        estimate: heuristic(start, goal, grid),
    });

    while let Some(node) = frontier.pop() {
        explored += 1;
        if node.state == goal {
            let mut path: Vec<Position> = vec![goal];
            let mut current: Position = goal;
            while let Some(previous) = came_from[index(current)] {
                path.push(previous);
                current = previous;
            }
            path.reverse();
            if log_enabled!(Level::Debug) {
                debug!(
                    "Search {start} -> {goal}: {} steps, {explored} cells explored",
                    path.len() - 1
                );
            }
            return path;
        }

        for next in steps(node.state, grid, walls) {
            let i: usize = index(next);
            if discovered[i] {
                continue;
            }
            discovered[i] = true;
            came_from[i] = Some(node.state);
            let cost: usize = node.cost + 1;
            frontier.push(FrontierNode {
                state: next,
                cost,
                estimate: cost as f64 + heuristic(next, goal, grid),
            });
        }
    }

    debug!("Search {start} -> {goal}: unreachable, {explored} cells explored");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::position::Direction;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    /// Verify that consecutive cells of the path are valid steps.
    fn assert_valid_path(path: &[Position], grid: &Grid, walls: &WallMap) {
        for w in path.windows(2) {
            assert!(
                steps(w[0], grid, walls).contains(&w[1]),
                "{} -> {} is not a valid step",
                w[0],
                w[1]
            );
        }
    }

    #[test]
    fn start_is_goal() {
        let grid: Grid = Grid::new(3, 3);
        assert_eq!(search(p(1, 1), p(1, 1), &grid, &WallMap::new()), vec![p(1, 1)]);
    }

    #[test]
    fn open_grid_path() {
        let grid: Grid = Grid::new(5, 4);
        let walls: WallMap = WallMap::new();
        let path: Vec<Position> = search(p(0, 0), p(4, 3), &grid, &walls);

        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(4, 3)));
        assert_valid_path(&path, &grid, &walls);
    }

    #[test]
    fn path_goes_around_obstacles() {
        let mut grid: Grid = Grid::new(4, 4);
        grid.set(p(1, 0), CellKind::Hole);
        grid.set(p(1, 1), CellKind::Eye(Direction::North));
        grid.set(p(1, 2), CellKind::Hole);
        let mut walls: WallMap = WallMap::new();
        walls.add(p(2, 3), p(2, 2));

        let path: Vec<Position> = search(p(0, 0), p(3, 0), &grid, &walls);

        assert_eq!(path.last(), Some(&p(3, 0)));
        assert!(path.contains(&p(1, 3)));
        assert!(path.contains(&p(0, 3)));
        assert_valid_path(&path, &grid, &walls);
    }

    #[test]
    fn rivers_can_be_crossed() {
        let mut grid: Grid = Grid::new(3, 1);
        grid.set(p(1, 0), CellKind::River(Direction::South));

        assert_eq!(search(p(0, 0), p(2, 0), &grid, &WallMap::new()).len(), 3);
    }

    #[test]
    fn walls_block_both_ways() {
        let grid: Grid = Grid::new(2, 1);
        let mut walls: WallMap = WallMap::new();
        walls.add(p(1, 0), p(0, 0));

        assert!(search(p(0, 0), p(1, 0), &grid, &walls).is_empty());
        assert!(search(p(1, 0), p(0, 0), &grid, &walls).is_empty());
    }

    #[test]
    fn goal_on_an_obstacle_is_unreachable() {
        let mut grid: Grid = Grid::new(3, 3);
        grid.set(p(2, 2), CellKind::Hole);

        assert!(search(p(0, 0), p(2, 2), &grid, &WallMap::new()).is_empty());
        assert!(search(p(0, 0), p(3, 3), &grid, &WallMap::new()).is_empty());
    }

    #[test]
    fn penalty_ignores_eye_and_rivers() {
        let mut grid: Grid = Grid::new(4, 1);
        grid.set(p(1, 0), CellKind::River(Direction::East));
        grid.set(p(2, 0), CellKind::Eye(Direction::West));

        // (0,0) and (3,0) are grass, (1,0) and (2,0) are not counted
        assert_eq!(obstruction_penalty(p(0, 0), p(3, 0), &grid), 2);
        assert!((heuristic(p(0, 0), p(3, 0), &grid) - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn frontier_pops_smallest_estimate_first() {
        let mut heap: BinaryHeap<FrontierNode> = BinaryHeap::new();
        for (i, e) in [5.0, 1.5, 3.0].iter().enumerate() {
            heap.push(FrontierNode {
                state: p(i, 0),
                cost: 0,
                estimate: *e,
            });
        }

        assert_eq!(heap.pop().map(|n| n.state), Some(p(1, 0)));
        assert_eq!(heap.pop().map(|n| n.state), Some(p(2, 0)));
    }
}
