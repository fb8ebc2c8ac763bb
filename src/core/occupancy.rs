//! Walkability / collision oracle over a `Maze`.
//!
//! Coordinates are signed so callers can ask about cells just outside the
//! grid; anything out of range is solid.
use serde::{Deserialize, Serialize};

use crate::core::maze::{Dir, Maze};

/// How standing wall flags turn into blocking.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallRule {
    /// A cell is solid only when all four flags are set. In a generated maze
    /// that means only the outer boundary stops rays and movement.
    #[default]
    Enclosed,
    /// Like `Enclosed`, and crossing a standing flag between two adjacent
    /// cells is blocked as well.
    Edges,
}

#[derive(Copy, Clone, Debug)]
pub struct OccupancyModel<'a> {
    maze: &'a Maze,
    rule: WallRule,
}

impl<'a> OccupancyModel<'a> {
    pub fn new(maze: &'a Maze, rule: WallRule) -> Self { Self { maze, rule } }

    #[inline] pub fn rows(&self) -> i32 { self.maze.rows() as i32 }
    #[inline] pub fn cols(&self) -> i32 { self.maze.cols() as i32 }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && row < self.rows() && col < self.cols()
    }

    /// Solid when out of range or fully enclosed.
    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        if !self.in_bounds(row, col) { return true; }
        self.maze.cell(row as usize, col as usize).map(|c| c.is_enclosed()).unwrap_or(true)
    }

    /// Cell containing the world point (x = col axis, y = row axis).
    #[inline]
    pub fn cell_at(x: f32, y: f32) -> (i32, i32) {
        (y.floor() as i32, x.floor() as i32)
    }

    /// Whether going from cell `from` to cell `to` (both `(row, col)`) is blocked.
    pub fn blocks(&self, from: (i32, i32), to: (i32, i32)) -> bool {
        if self.is_wall(to.0, to.1) { return true; }
        match self.rule {
            WallRule::Enclosed => false,
            WallRule::Edges => self.edge_blocked(from, to),
        }
    }

    /// Walks every cell the straight segment (x0,y0)→(x1,y1) passes through,
    /// checking `blocks` on each adjacent pair. A segment that stays inside one
    /// cell reduces to `is_wall` of that cell.
    pub fn segment_blocked(&self, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
        let mut cell = Self::cell_at(x0, y0);
        let end = Self::cell_at(x1, y1);
        if cell == end { return self.blocks(cell, end); }

        let (dx, dy) = (x1 - x0, y1 - y0);
        let step_c = if dx > 0.0 { 1 } else { -1 };
        let step_r = if dy > 0.0 { 1 } else { -1 };
        let t_delta_x = if dx != 0.0 { 1.0 / dx.abs() } else { f32::INFINITY };
        let t_delta_y = if dy != 0.0 { 1.0 / dy.abs() } else { f32::INFINITY };
        let mut t_max_x = if dx > 0.0 {
            (x0.floor() + 1.0 - x0) / dx
        } else if dx < 0.0 {
            (x0 - x0.floor()) / -dx
        } else {
            f32::INFINITY
        };
        let mut t_max_y = if dy > 0.0 {
            (y0.floor() + 1.0 - y0) / dy
        } else if dy < 0.0 {
            (y0 - y0.floor()) / -dy
        } else {
            f32::INFINITY
        };

        // tope de iteraciones: distancia Manhattan entre celdas
        let max_steps = (end.0 - cell.0).unsigned_abs() + (end.1 - cell.1).unsigned_abs();
        for _ in 0..max_steps {
            if cell == end { break; }
            let next = if t_max_x < t_max_y {
                t_max_x += t_delta_x;
                (cell.0, cell.1 + step_c)
            } else {
                t_max_y += t_delta_y;
                (cell.0 + step_r, cell.1)
            };
            if self.blocks(cell, next) { return true; }
            cell = next;
        }
        // deriva de coma flotante: último salto directo
        cell != end && self.blocks(cell, end)
    }

    fn edge_blocked(&self, from: (i32, i32), to: (i32, i32)) -> bool {
        let (dr, dc) = (to.0 - from.0, to.1 - from.1);
        match (dr.abs(), dc.abs()) {
            (0, 0) => false,
            (0, 1) | (1, 0) => self.flag_between(from, to),
            (1, 1) => {
                // diagonal: vale si alguno de los dos caminos en L está abierto
                let via_row = (from.0 + dr, from.1);
                let via_col = (from.0, from.1 + dc);
                let open = |mid: (i32, i32)| {
                    !self.is_wall(mid.0, mid.1) && !self.flag_between(from, mid) && !self.flag_between(mid, to)
                };
                !(open(via_row) || open(via_col))
            }
            _ => true,
        }
    }

    // Adjacent cells only.
    fn flag_between(&self, a: (i32, i32), b: (i32, i32)) -> bool {
        if !self.in_bounds(a.0, a.1) || !self.in_bounds(b.0, b.1) { return true; }
        let dir = match (b.0 - a.0, b.1 - a.1) {
            (-1, 0) => Dir::North,
            (0, 1) => Dir::East,
            (1, 0) => Dir::South,
            (0, -1) => Dir::West,
            _ => return true,
        };
        self.maze.has_wall(a.0 as usize, a.1 as usize, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn enclosed_rule_matches_all_four_flags() {
        let mut maze = Maze::closed(2, 2).unwrap();
        maze.carve(0, 0, Dir::East);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(!occ.is_wall(0, 0));
        assert!(!occ.is_wall(0, 1));
        assert!(occ.is_wall(1, 0));
        assert!(occ.is_wall(1, 1));
    }

    #[test]
    fn out_of_range_is_solid() {
        let maze = Maze::generate(3, 3, &mut Xoshiro256PlusPlus::seed_from_u64(5)).unwrap();
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(occ.is_wall(-1, 0));
        assert!(occ.is_wall(0, -1));
        assert!(occ.is_wall(3, 0));
        assert!(occ.is_wall(0, 3));
        assert!(!occ.is_wall(1, 1));
    }

    #[test]
    fn single_cell_is_solid() {
        let maze = Maze::generate(1, 1, &mut Xoshiro256PlusPlus::seed_from_u64(0)).unwrap();
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(occ.is_wall(0, 0));
    }

    #[test]
    fn enclosed_rule_ignores_interior_segments() {
        // fila abierta en L: (0,0)-(0,1)-(1,1)-(1,0); (0,0)|(1,0) sigue cerrada
        let mut maze = Maze::closed(2, 2).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(0, 1, Dir::South);
        maze.carve(1, 1, Dir::West);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(!occ.blocks((0, 0), (1, 0)));
        let occ = OccupancyModel::new(&maze, WallRule::Edges);
        assert!(occ.blocks((0, 0), (1, 0)));
        assert!(!occ.blocks((0, 0), (0, 1)));
        assert!(!occ.blocks((0, 0), (0, 0)));
    }

    #[test]
    fn edges_rule_diagonals_and_jumps() {
        let mut maze = Maze::closed(2, 2).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(0, 1, Dir::South);
        maze.carve(1, 1, Dir::West);
        let occ = OccupancyModel::new(&maze, WallRule::Edges);
        // (0,0) -> (1,1) por (0,1)
        assert!(!occ.blocks((0, 0), (1, 1)));
        // (0,1) -> (1,0): por (0,0) falla en el paso sur; por (1,1) está abierto
        assert!(!occ.blocks((0, 1), (1, 0)));
        assert!(occ.blocks((0, 0), (0, 2)));
        assert!(occ.blocks((0, 1), (0, 2)));

        let mut maze = Maze::closed(2, 2).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(1, 0, Dir::East);
        let occ = OccupancyModel::new(&maze, WallRule::Edges);
        assert!(occ.blocks((0, 0), (1, 1)));
    }

    fn open_row(cols: usize) -> Maze {
        let mut maze = Maze::closed(1, cols).unwrap();
        for c in 0..cols - 1 { maze.carve(0, c, Dir::East); }
        maze
    }

    #[test]
    fn segment_through_open_row_is_clear() {
        let maze = open_row(30);
        for rule in [WallRule::Enclosed, WallRule::Edges] {
            let occ = OccupancyModel::new(&maze, rule);
            assert!(!occ.segment_blocked(0.5, 0.5, 2.8, 0.5));
            assert!(!occ.segment_blocked(27.9, 0.5, 3.1, 0.6));
            assert!(!occ.segment_blocked(4.2, 0.5, 4.7, 0.5));
        }
    }

    #[test]
    fn segment_stops_at_standing_flag_it_skips_over() {
        // (0,3)|(0,4) sigue cerrada
        let mut maze = Maze::closed(1, 8).unwrap();
        for c in 0..7 { if c != 3 { maze.carve(0, c, Dir::East); } }
        let occ = OccupancyModel::new(&maze, WallRule::Edges);
        assert!(occ.segment_blocked(1.5, 0.5, 6.5, 0.5));
        assert!(occ.segment_blocked(6.5, 0.5, 1.5, 0.5));
        assert!(!occ.segment_blocked(0.5, 0.5, 3.9, 0.5));
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(!occ.segment_blocked(1.5, 0.5, 6.5, 0.5));
    }

    #[test]
    fn segment_checks_enclosed_cells_in_between() {
        let mut maze = Maze::closed(1, 6).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(0, 4, Dir::East);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        // (0,2) y (0,3) están cerradas del todo
        assert!(occ.segment_blocked(1.5, 0.5, 4.5, 0.5));
        assert!(!occ.segment_blocked(4.5, 0.5, 5.5, 0.5));
        // dentro de una celda sólida
        assert!(occ.segment_blocked(2.2, 0.5, 2.7, 0.5));
    }

    #[test]
    fn cell_at_floors_negative_coordinates() {
        assert_eq!(OccupancyModel::cell_at(0.5, 2.9), (2, 0));
        assert_eq!(OccupancyModel::cell_at(-0.2, 0.3), (0, -1));
    }
}
