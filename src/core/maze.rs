//! Maze grid and randomized depth-first generation.
use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir { North, East, South, West }

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    #[inline]
    pub fn index(self) -> usize {
        match self { Dir::North => 0, Dir::East => 1, Dir::South => 2, Dir::West => 3 }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self { Dir::North => Dir::South, Dir::East => Dir::West, Dir::South => Dir::North, Dir::West => Dir::East }
    }

    /// (d_row, d_col)
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self { Dir::North => (-1, 0), Dir::East => (0, 1), Dir::South => (1, 0), Dir::West => (0, -1) }
    }
}

/// One grid cell; `walls` is indexed N, E, S, W.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub walls: [bool; 4],
}

impl Cell {
    pub const CLOSED: Cell = Cell { walls: [true; 4] };

    #[inline] pub fn has_wall(&self, dir: Dir) -> bool { self.walls[dir.index()] }
    #[inline] pub fn is_enclosed(&self) -> bool { self.walls.iter().all(|&w| w) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

// Frame of the explicit DFS stack: cell + its shuffled directions + next to try.
struct Frame {
    row: usize,
    col: usize,
    dirs: [Dir; 4],
    next: usize,
}

impl Maze {
    /// Grid with every wall standing.
    pub fn closed(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidGrid { rows, cols });
        }
        Ok(Self { rows, cols, cells: vec![Cell::CLOSED; rows * cols] })
    }

    /// Randomized DFS from (0,0). Every cell ends up reachable and the
    /// passages form a spanning tree. Same RNG stream, same maze.
    pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, ConfigError> {
        let mut maze = Self::closed(rows, cols)?;
        let mut visited = vec![false; rows * cols];
        let mut stack: Vec<Frame> = Vec::with_capacity(rows * cols);

        visited[0] = true;
        stack.push(Frame { row: 0, col: 0, dirs: shuffled_dirs(rng), next: 0 });

        while let Some(top) = stack.last_mut() {
            if top.next == top.dirs.len() {
                stack.pop();
                continue;
            }
            let dir = top.dirs[top.next];
            top.next += 1;
            let (row, col) = (top.row, top.col);
            let Some((nr, nc)) = maze.neighbor(row, col, dir) else { continue };
            if visited[nr * cols + nc] { continue; }

            maze.carve(row, col, dir);
            visited[nr * cols + nc] = true;
            // shuffle al entrar a la celda, igual que la versión recursiva
            stack.push(Frame { row: nr, col: nc, dirs: shuffled_dirs(rng), next: 0 });
        }

        debug!(rows, cols, passages = maze.passage_count(), "maze generated");
        Ok(maze)
    }

    #[inline] pub fn rows(&self) -> usize { self.rows }
    #[inline] pub fn cols(&self) -> usize { self.cols }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols { self.cells.get(row * self.cols + col) } else { None }
    }

    /// Out-of-range cells report every wall as standing.
    pub fn has_wall(&self, row: usize, col: usize, dir: Dir) -> bool {
        self.cell(row, col).map(|c| c.has_wall(dir)).unwrap_or(true)
    }

    pub fn neighbor(&self, row: usize, col: usize, dir: Dir) -> Option<(usize, usize)> {
        let (dr, dc) = dir.delta();
        let nr = row.checked_add_signed(dr as isize)?;
        let nc = col.checked_add_signed(dc as isize)?;
        (nr < self.rows && nc < self.cols).then_some((nr, nc))
    }

    /// Opens the wall between (row, col) and its neighbour in `dir`, on both
    /// sides. Returns false when there is no such neighbour.
    pub fn carve(&mut self, row: usize, col: usize, dir: Dir) -> bool {
        let Some((nr, nc)) = self.neighbor(row, col, dir) else { return false };
        let cols = self.cols;
        self.cells[row * cols + col].walls[dir.index()] = false;
        self.cells[nr * cols + nc].walls[dir.opposite().index()] = false;
        true
    }

    /// Number of open walls between pairs of cells.
    pub fn passage_count(&self) -> usize {
        let mut n = 0;
        for row in 0..self.rows {
            for col in 0..self.cols {
                // contar sólo E y S para no duplicar
                if col + 1 < self.cols && !self.has_wall(row, col, Dir::East) { n += 1; }
                if row + 1 < self.rows && !self.has_wall(row, col, Dir::South) { n += 1; }
            }
        }
        n
    }

    /// Flood fill through open passages; returns how many cells were reached.
    pub fn reachable_from(&self, row: usize, col: usize) -> usize {
        if self.cell(row, col).is_none() { return 0; }
        let mut seen = vec![false; self.rows * self.cols];
        let mut q = VecDeque::new();
        seen[row * self.cols + col] = true;
        q.push_back((row, col));
        let mut count = 0;
        while let Some((r, c)) = q.pop_front() {
            count += 1;
            for dir in Dir::ALL {
                if self.has_wall(r, c, dir) { continue; }
                if let Some((nr, nc)) = self.neighbor(r, c, dir) {
                    let idx = nr * self.cols + nc;
                    if !seen[idx] { seen[idx] = true; q.push_back((nr, nc)); }
                }
            }
        }
        count
    }
}

fn shuffled_dirs<R: Rng + ?Sized>(rng: &mut R) -> [Dir; 4] {
    let mut dirs = Dir::ALL;
    dirs.shuffle(rng);
    dirs
}
