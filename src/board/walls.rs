/*
walls.rs

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

//! Walls between adjacent cells.
//!
//! A wall blocks the edge between two cells that share a side.
//! The [`WallMap`] object stores the walls of a board and keeps them in insertion order, so that
//! the list of walls in a board configuration can be rebuilt index for index.

use indexmap::IndexSet;
use log::debug;
use std::hash::{Hash, Hasher};

use super::position::Position;

/// Wall between two adjacent cells.
///
/// The wall keeps the order in which its two cells were given, but two walls are equal, and hash
/// the same, whatever the order of their cells.
#[derive(Debug, Copy, Clone)]
pub struct Wall {
    pub from: Position,
    pub to: Position,
}

impl Hash for Wall {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b): (Position, Position) = self.ordered();
        a.hash(state);
        b.hash(state);
    }
}

impl PartialEq for Wall {
    fn eq(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl Eq for Wall {}

impl Wall {
    /// Create a [`Wall`] object, or return None if the two positions are not adjacent.
    pub fn new(from: Position, to: Position) -> Option<Self> {
        if from.is_adjacent(to) {
            Some(Self { from, to })
        } else {
            None
        }
    }

    /// Return the two cells, smallest first (row-major order).
    pub fn ordered(&self) -> (Position, Position) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// Copy of the walls, used to roll back a batch of trial walls.
#[derive(Debug, Clone)]
pub struct WallSnapshot(IndexSet<Wall>);

/// Set of walls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallMap {
    walls: IndexSet<Wall>,
}

impl WallMap {
    /// Create an empty [`WallMap`] object.
    pub fn new() -> Self {
        Self {
            walls: IndexSet::new(),
        }
    }

    /// Return the key that identifies the edge between the two positions, whatever their order.
    ///
    /// Return None if the positions are not adjacent.
    pub fn canonical_key(a: Position, b: Position) -> Option<(Position, Position)> {
        Wall::new(a, b).map(|w| w.ordered())
    }

    /// Add a wall between two adjacent cells.
    ///
    /// Return `false` if the cells are not adjacent or if the wall already exists.
    pub fn add(&mut self, a: Position, b: Position) -> bool {
        match Wall::new(a, b) {
            Some(w) => self.walls.insert(w),
            None => {
                debug!("Ignoring wall {a}-{b}: the cells are not adjacent");
                false
            }
        }
    }

    /// Whether there is a wall between the two cells.
    pub fn contains(&self, a: Position, b: Position) -> bool {
        match Wall::new(a, b) {
            Some(w) => self.walls.contains(&w),
            None => false,
        }
    }

    /// Remove the wall between the two cells, keeping the order of the other walls.
    ///
    /// Return `false` if there was no such wall.
    pub fn remove(&mut self, a: Position, b: Position) -> bool {
        match Wall::new(a, b) {
            Some(w) => self.walls.shift_remove(&w),
            None => false,
        }
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether there are no walls.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Iterate over the walls in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    /// Save the current walls.
    pub fn snapshot(&self) -> WallSnapshot {
        WallSnapshot(self.walls.clone())
    }

    /// Replace the walls by the ones saved in the given snapshot.
    pub fn restore(&mut self, snapshot: WallSnapshot) {
        self.walls = snapshot.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::position::Direction;
    use proptest::prelude::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn canonical_key_ignores_the_order() {
        assert_eq!(
            WallMap::canonical_key(p(1, 2), p(1, 1)),
            WallMap::canonical_key(p(1, 1), p(1, 2))
        );
        assert_eq!(
            WallMap::canonical_key(p(2, 1), p(1, 1)),
            Some((p(1, 1), p(2, 1)))
        );
        assert_eq!(WallMap::canonical_key(p(0, 0), p(1, 1)), None);
        assert_eq!(WallMap::canonical_key(p(0, 0), p(0, 0)), None);
    }

    #[test]
    fn add_rejects_duplicates_and_non_adjacent_cells() {
        let mut walls: WallMap = WallMap::new();

        assert!(walls.add(p(0, 0), p(1, 0)));
        assert!(!walls.add(p(1, 0), p(0, 0)));
        assert!(!walls.add(p(0, 0), p(2, 0)));
        assert_eq!(walls.len(), 1);
    }

    #[test]
    fn remove_keeps_the_insertion_order() {
        let mut walls: WallMap = WallMap::new();
        walls.add(p(0, 0), p(1, 0));
        walls.add(p(1, 1), p(1, 0));
        walls.add(p(2, 2), p(2, 1));

        assert!(walls.remove(p(1, 0), p(1, 1)));
        assert!(!walls.remove(p(1, 0), p(1, 1)));

        let order: Vec<(Position, Position)> = walls.iter().map(|w| (w.from, w.to)).collect();
        assert_eq!(order, vec![(p(0, 0), p(1, 0)), (p(2, 2), p(2, 1))]);
    }

    #[test]
    fn restore_rolls_back_trial_walls() {
        let mut walls: WallMap = WallMap::new();
        walls.add(p(0, 0), p(0, 1));

        let snapshot: WallSnapshot = walls.snapshot();
        walls.add(p(1, 1), p(1, 2));
        walls.add(p(2, 1), p(2, 2));
        walls.remove(p(0, 1), p(0, 0));
        walls.restore(snapshot);

        assert_eq!(walls.len(), 1);
        assert!(walls.contains(p(0, 1), p(0, 0)));
        assert!(!walls.contains(p(1, 1), p(1, 2)));
    }

    proptest! {
        #[test]
        fn contains_is_symmetric(
            x in 0usize..6,
            y in 0usize..6,
            dir in 0u8..4,
            others in proptest::collection::vec((0usize..6, 0usize..6, 0u8..4), 0..20),
        ) {
            let mut walls: WallMap = WallMap::new();
            for (ox, oy, od) in others {
                let a: Position = p(ox, oy);
                if let Some(b) = a.step(Direction::from_repr(od).unwrap(), 6, 6) {
                    walls.add(a, b);
                }
            }
            let a: Position = p(x, y);
            if let Some(b) = a.step(Direction::from_repr(dir).unwrap(), 6, 6) {
                prop_assert_eq!(walls.contains(a, b), walls.contains(b, a));
                walls.add(b, a);
                prop_assert!(walls.contains(a, b));
                prop_assert!(walls.contains(b, a));
            }
        }
    }
}
