//! Enemy AI: drift along a heading, veer towards the player when close.
use rand::Rng;
use tracing::warn;

/// Enemies notice the player inside this radius (cells).
pub const SIGHT_RADIUS: f32 = 8.0;
/// Max random deviation (rad) added to the bearing when chasing.
pub const AIM_JITTER: f32 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Movement direction (rad).
    pub direction: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: f32, direction: f32) -> Self {
        Self { x, y, speed, direction }
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) { (self.x, self.y) }

    #[inline]
    pub fn distance_to(&self, px: f32, py: f32) -> f32 { (px - self.x).hypot(py - self.y) }

    /// Returns true when the player was inside the sight radius this tick.
    /// Enemies pass through walls and each other.
    pub fn update<R: Rng + ?Sized>(&mut self, player: (f32, f32), dt: f32, rng: &mut R) -> bool {
        let (px, py) = player;
        let sees = self.distance_to(px, py) < SIGHT_RADIUS;
        if sees {
            // persecución imperfecta
            self.direction = (py - self.y).atan2(px - self.x) + rng.gen_range(-AIM_JITTER..=AIM_JITTER);
        }
        self.x += self.direction.cos() * self.speed * dt;
        self.y += self.direction.sin() * self.speed * dt;
        sees
    }
}

/// Places `count` enemies uniformly over the grid, outside the start cell.
/// A 1x1 grid has no room, so nothing is spawned.
pub fn spawn_enemies<R: Rng + ?Sized>(count: usize, rows: usize, cols: usize, speed: f32, rng: &mut R) -> Vec<Enemy> {
    if count == 0 { return Vec::new(); }
    if rows <= 1 && cols <= 1 {
        warn!(count, "maze has a single cell; no room to spawn enemies");
        return Vec::new();
    }
    let (w, h) = (cols as f32, rows as f32);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let x = rng.gen_range(0.0..w);
        let y = rng.gen_range(0.0..h);
        if x > 1.0 || y > 1.0 {
            let dir = rng.gen_range(0.0..std::f32::consts::TAU);
            out.push(Enemy::new(x, y, speed, dir));
        }
    }
    out
}
