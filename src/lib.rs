//! Grid Invaders - a fixed-grid invaders arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `render`: Draw-list construction consumed by the frontend
//! - `scoreboard`: Best-score tracking across rounds
//! - `persistence`: High score durable storage

pub mod persistence;
pub mod render;
pub mod scoreboard;
pub mod sim;

pub use scoreboard::Scoreboard;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (frames per second)
    pub const TICK_RATE: u32 = 60;

    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ship dimensions and per-frame speed
    pub const SHIP_WIDTH: f32 = 60.0;
    pub const SHIP_HEIGHT: f32 = 40.0;
    pub const SHIP_SPEED: f32 = 5.0;
    /// Gap between the ship's bottom edge and the screen bottom
    pub const SHIP_BOTTOM_MARGIN: f32 = 10.0;

    /// Bullet dimensions (player and enemy bullets share them)
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    /// Per-frame bullet speed (player bullets up, enemy bullets down)
    pub const BULLET_SPEED: f32 = 5.0;

    /// Enemy grid layout
    pub const ENEMY_ROWS: usize = 5;
    pub const ENEMY_COLS: usize = 10;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    /// Gap between adjacent enemies in both axes
    pub const ENEMY_SPACING: f32 = 10.0;
    /// Grid origin (top-left corner of the first enemy)
    pub const GRID_ORIGIN_X: f32 = 50.0;
    pub const GRID_ORIGIN_Y: f32 = 50.0;

    /// Vertical displacement applied to the whole swarm on direction reversal
    pub const SWARM_DROP: f32 = 10.0;
    /// Swarm speed tiers keyed on remaining enemy count (see `swarm_speed`)
    pub const SWARM_BASE_SPEED: f32 = 1.0;
    pub const SWARM_SPEED_UNDER_30: f32 = 1.2;
    pub const SWARM_SPEED_UNDER_20: f32 = 1.5;
    pub const SWARM_SPEED_UNDER_10: f32 = 1.8;

    /// Minimum interval between enemy shots, in ticks (1 second)
    pub const ENEMY_FIRE_COOLDOWN_TICKS: u32 = TICK_RATE;
    /// Per-enemy fire chance out of 100, rolled once the cooldown elapses
    pub const ENEMY_FIRE_CHANCE: u32 = 5;

    /// Score awarded per destroyed enemy
    pub const KILL_SCORE: u32 = 10;

    /// Duration of the game-over pause, in ticks (3 seconds)
    pub const GAME_OVER_PAUSE_TICKS: u32 = 3 * TICK_RATE;

    /// Durable storage for the high score
    pub const HIGH_SCORE_FILE: &str = "data.txt";
}
