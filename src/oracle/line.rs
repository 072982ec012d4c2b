/*
line.rs

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

//! Rasterize the straight line between two cells.

use crate::board::position::Position;

/// Return the cells crossed by the straight line from `from` to `to`, both ends included, by
/// using Bresenham's algorithm.
pub fn bresenham(from: Position, to: Position) -> Vec<Position> {
    let (mut x, mut y): (i64, i64) = (from.x as i64, from.y as i64);
    let (x1, y1): (i64, i64) = (to.x as i64, to.y as i64);
    let dx: i64 = (x1 - x).abs();
    let dy: i64 = -(y1 - y).abs();
    let sx: i64 = if x < x1 { 1 } else { -1 };
    let sy: i64 = if y < y1 { 1 } else { -1 };
    let mut err: i64 = dx + dy;
    let mut cells: Vec<Position> = Vec::with_capacity((dx - dy + 1) as usize);

    loop {
        // The coordinates never leave the rectangle between the two (unsigned) ends
        cells.push(Position::new(x as usize, y as usize));
        if x == x1 && y == y1 {
            break;
        }
        let e2: i64 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn single_cell() {
        assert_eq!(bresenham(p(2, 3), p(2, 3)), vec![p(2, 3)]);
    }

    #[test]
    fn horizontal_and_vertical_lines() {
        assert_eq!(bresenham(p(0, 1), p(3, 1)), vec![p(0, 1), p(1, 1), p(2, 1), p(3, 1)]);
        assert_eq!(bresenham(p(1, 2), p(1, 0)), vec![p(1, 2), p(1, 1), p(1, 0)]);
    }

    #[test]
    fn diagonal_line() {
        assert_eq!(bresenham(p(3, 0), p(0, 3)), vec![p(3, 0), p(2, 1), p(1, 2), p(0, 3)]);
    }

    #[test]
    fn shallow_line_has_one_cell_per_column() {
        let line: Vec<Position> = bresenham(p(0, 0), p(6, 2));

        assert_eq!(line.len(), 7);
        assert_eq!(line.first(), Some(&p(0, 0)));
        assert_eq!(line.last(), Some(&p(6, 2)));
        for w in line.windows(2) {
            assert_eq!(w[1].x, w[0].x + 1);
            assert!(w[1].y >= w[0].y && w[1].y - w[0].y <= 1);
        }
    }
}
