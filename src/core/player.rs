//! Player data and movement.
use crate::config::GameConfig;
use crate::core::occupancy::OccupancyModel;

/// Position in cell units (x = column axis, y = row axis) plus heading.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self { Self { x, y, angle } }

    #[inline]
    pub fn cell(&self) -> (i32, i32) { OccupancyModel::cell_at(self.x, self.y) }
}

/// Per-frame input intents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pose: Pose,
    pub speed: f32,
    pub rot_speed: f32,
    /// Session time (s) of the last accepted move or rotation.
    pub last_active: f64,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32, cfg: &GameConfig) -> Self {
        Self {
            pose: Pose::new(x, y, angle),
            speed: cfg.player_speed,
            rot_speed: cfg.rotation_speed,
            last_active: 0.0,
        }
    }

    /// Applies one frame of input. Translation is rejected when the target cell
    /// is blocked; rotation always goes through. Returns whether anything moved.
    pub fn apply(&mut self, intent: MoveIntent, dt: f32, now: f64, occ: &OccupancyModel) -> bool {
        let mut active = false;
        let step = self.speed * dt;

        if intent.forward { active |= self.try_translate(step, occ); }
        if intent.backward { active |= self.try_translate(-step, occ); }
        if intent.rotate_left {
            self.pose.angle -= self.rot_speed * dt;
            active = true;
        }
        if intent.rotate_right {
            self.pose.angle += self.rot_speed * dt;
            active = true;
        }

        if active { self.last_active = now; }
        active
    }

    fn try_translate(&mut self, dist: f32, occ: &OccupancyModel) -> bool {
        let nx = self.pose.x + self.pose.angle.cos() * dist;
        let ny = self.pose.y + self.pose.angle.sin() * dist;
        if !nx.is_finite() || !ny.is_finite() { return false; }
        if occ.blocks(self.pose.cell(), OccupancyModel::cell_at(nx, ny)) { return false; }
        self.pose.x = nx;
        self.pose.y = ny;
        true
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) { (self.pose.x, self.pose.y) }

    #[inline]
    pub fn idle_for(&self, now: f64) -> f64 { (now - self.last_active).max(0.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::maze::{Dir, Maze};
    use crate::core::occupancy::WallRule;

    const EPS: f32 = 1e-5;

    fn open_row(cols: usize) -> Maze {
        let mut maze = Maze::closed(1, cols).unwrap();
        for c in 0..cols - 1 { maze.carve(0, c, Dir::East); }
        maze
    }

    #[test]
    fn forward_moves_exactly_speed_dt() {
        let maze = open_row(4);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let cfg = GameConfig::default();
        let mut p = Player::new(0.5, 0.5, 0.0, &cfg);
        let moved = p.apply(MoveIntent { forward: true, ..Default::default() }, 0.1, 1.0, &occ);
        assert!(moved);
        assert!((p.pose.x - (0.5 + cfg.player_speed * 0.1)).abs() < EPS);
        assert!((p.pose.y - 0.5).abs() < EPS);
        assert_eq!(p.last_active, 1.0);
    }

    #[test]
    fn backward_along_diagonal_heading() {
        let mut maze = Maze::closed(3, 3).unwrap();
        maze.carve(1, 1, Dir::North);
        maze.carve(0, 1, Dir::West);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let cfg = GameConfig { player_speed: 2.0, ..GameConfig::default() };
        let angle = std::f32::consts::FRAC_PI_4;
        let mut p = Player::new(1.5, 1.5, angle, &cfg);
        p.apply(MoveIntent { backward: true, ..Default::default() }, 0.2, 0.5, &occ);
        let (dx, dy) = (p.pose.x - 1.5, p.pose.y - 1.5);
        assert!(((dx * dx + dy * dy).sqrt() - 0.4).abs() < EPS);
        assert!((dx - (-angle.cos() * 0.4)).abs() < EPS);
        assert!((dy - (-angle.sin() * 0.4)).abs() < EPS);
    }

    #[test]
    fn move_into_wall_is_rejected() {
        // celda (0,3) cerrada
        let mut maze = Maze::closed(1, 4).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(0, 1, Dir::East);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let cfg = GameConfig::default();
        let mut p = Player::new(2.9, 0.5, 0.0, &cfg);
        let moved = p.apply(MoveIntent { forward: true, ..Default::default() }, 0.1, 3.0, &occ);
        assert!(!moved);
        assert_eq!(p.position(), (2.9, 0.5));
        assert_eq!(p.last_active, 0.0);
    }

    #[test]
    fn move_out_of_grid_is_rejected() {
        let maze = open_row(3);
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let cfg = GameConfig::default();
        let mut p = Player::new(0.5, 0.5, std::f32::consts::PI, &cfg);
        assert!(!p.apply(MoveIntent { forward: true, ..Default::default() }, 0.5, 1.0, &occ));
        assert_eq!(p.position(), (0.5, 0.5));
    }

    #[test]
    fn one_by_one_maze_blocks_every_step() {
        let maze = Maze::closed(1, 1).unwrap();
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let mut p = Player::new(0.5, 0.5, 0.0, &GameConfig::default());
        assert!(!p.apply(MoveIntent { forward: true, ..Default::default() }, 0.01, 1.0, &occ));
        assert_eq!(p.position(), (0.5, 0.5));
    }

    #[test]
    fn rotation_ignores_walls_and_counts_as_activity() {
        let maze = Maze::closed(1, 1).unwrap();
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        let cfg = GameConfig::default();
        let mut p = Player::new(0.5, 0.5, 0.0, &cfg);
        assert!(p.apply(MoveIntent { rotate_right: true, ..Default::default() }, 0.5, 2.0, &occ));
        assert!((p.pose.angle - cfg.rotation_speed * 0.5).abs() < EPS);
        assert!(p.apply(MoveIntent { rotate_left: true, ..Default::default() }, 0.5, 4.0, &occ));
        assert!(p.pose.angle.abs() < EPS);
        assert_eq!(p.last_active, 4.0);
        assert_eq!(p.idle_for(6.5), 2.5);
    }

    #[test]
    fn edges_rule_stops_at_interior_segment() {
        let mut maze = Maze::closed(2, 2).unwrap();
        maze.carve(0, 0, Dir::East);
        maze.carve(0, 1, Dir::South);
        maze.carve(1, 1, Dir::West);
        let cfg = GameConfig::default();
        let mut p = Player::new(0.5, 0.9, std::f32::consts::FRAC_PI_2, &cfg);
        let intent = MoveIntent { forward: true, ..Default::default() };
        let occ = OccupancyModel::new(&maze, WallRule::Edges);
        assert!(!p.apply(intent, 0.1, 1.0, &occ));
        let occ = OccupancyModel::new(&maze, WallRule::Enclosed);
        assert!(p.apply(intent, 0.1, 1.0, &occ));
        assert_eq!(p.pose.cell(), (1, 0));
    }
}
