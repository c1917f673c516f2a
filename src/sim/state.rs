//! Game state and core simulation types
//!
//! All state that drives the per-frame update lives here, including the
//! seeded RNG: two states built from the same seed and fed the same inputs
//! stay bit-identical forever.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Terminal pause after a lost round; counts down and resets to Playing
    GameOverPause,
}

/// Swarm speed as a step function of the remaining enemy count
///
/// Fewer enemies means a faster swarm. Thresholds are fixed constants,
/// re-evaluated every frame from the live count.
pub fn swarm_speed(remaining: usize) -> f32 {
    if remaining < 10 {
        SWARM_SPEED_UNDER_10
    } else if remaining < 20 {
        SWARM_SPEED_UNDER_20
    } else if remaining < 30 {
        SWARM_SPEED_UNDER_30
    } else {
        SWARM_BASE_SPEED
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving enemy fire decisions
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player ship
    pub ship: Rect,
    /// The single player bullet, when live
    pub player_bullet: Option<Rect>,
    /// Live enemies in grid order (row-major); order drives fire and
    /// collision iteration
    pub enemies: Vec<Rect>,
    /// Live enemy bullets
    pub enemy_bullets: Vec<Rect>,
    /// Shared horizontal swarm direction (+1 right, -1 left)
    pub swarm_direction: f32,
    /// Ticks until enemies may fire again
    pub fire_cooldown: u32,
    /// Ticks left in the game-over pause (only meaningful in GameOverPause)
    pub pause_ticks: u32,
    /// Score for the current life
    pub score: u32,
    /// Best score seen; reconciled on every game-over transition
    pub high_score: u32,
}

impl GameState {
    /// Create a fresh game state with a full enemy grid
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            ship: Self::centered_ship(),
            player_bullet: None,
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            swarm_direction: 1.0,
            // Armed at startup: the swarm holds fire for the first interval
            fire_cooldown: ENEMY_FIRE_COOLDOWN_TICKS,
            pause_ticks: 0,
            score: 0,
            high_score: 0,
        };
        state.spawn_wave();
        state
    }

    /// Ship at its starting position: horizontally centered, near the bottom
    pub fn centered_ship() -> Rect {
        Rect::new(
            (SCREEN_WIDTH - SHIP_WIDTH) / 2.0,
            SCREEN_HEIGHT - SHIP_HEIGHT - SHIP_BOTTOM_MARGIN,
            SHIP_WIDTH,
            SHIP_HEIGHT,
        )
    }

    /// Regenerate the full enemy grid at its starting layout
    ///
    /// Touches nothing but the enemy set: wave progression keeps score,
    /// swarm direction and cooldown as they are.
    pub fn spawn_wave(&mut self) {
        self.enemies = (0..ENEMY_ROWS)
            .flat_map(|row| {
                (0..ENEMY_COLS).map(move |col| {
                    Rect::new(
                        col as f32 * (ENEMY_WIDTH + ENEMY_SPACING) + GRID_ORIGIN_X,
                        row as f32 * (ENEMY_HEIGHT + ENEMY_SPACING) + GRID_ORIGIN_Y,
                        ENEMY_WIDTH,
                        ENEMY_HEIGHT,
                    )
                })
            })
            .collect();
    }

    /// Full round reset after the game-over pause expires
    ///
    /// The high score survives; everything else returns to its initial value.
    pub fn reset_round(&mut self) {
        self.ship = Self::centered_ship();
        self.player_bullet = None;
        self.enemy_bullets.clear();
        self.spawn_wave();
        self.score = 0;
        self.swarm_direction = 1.0;
        self.fire_cooldown = 0;
        self.pause_ticks = 0;
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_layout() {
        let state = GameState::new(1);
        assert_eq!(state.enemies.len(), ENEMY_ROWS * ENEMY_COLS);

        // First enemy sits at the grid origin
        let first = &state.enemies[0];
        assert_eq!(first.left(), GRID_ORIGIN_X);
        assert_eq!(first.top(), GRID_ORIGIN_Y);

        // Row-major order: second enemy is one column to the right
        let second = &state.enemies[1];
        assert_eq!(second.left(), GRID_ORIGIN_X + ENEMY_WIDTH + ENEMY_SPACING);
        assert_eq!(second.top(), GRID_ORIGIN_Y);

        // Last enemy is at the bottom-right of the grid
        let last = state.enemies.last().unwrap();
        assert_eq!(
            last.left(),
            GRID_ORIGIN_X + 9.0 * (ENEMY_WIDTH + ENEMY_SPACING)
        );
        assert_eq!(
            last.top(),
            GRID_ORIGIN_Y + 4.0 * (ENEMY_HEIGHT + ENEMY_SPACING)
        );
    }

    #[test]
    fn test_ship_starts_centered() {
        let ship = GameState::centered_ship();
        assert_eq!(ship.left(), (SCREEN_WIDTH - SHIP_WIDTH) / 2.0);
        assert_eq!(ship.bottom(), SCREEN_HEIGHT - SHIP_BOTTOM_MARGIN);
    }

    #[test]
    fn test_swarm_speed_tiers() {
        assert_eq!(swarm_speed(9), SWARM_SPEED_UNDER_10);
        assert_eq!(swarm_speed(10), SWARM_SPEED_UNDER_20);
        assert_eq!(swarm_speed(19), SWARM_SPEED_UNDER_20);
        assert_eq!(swarm_speed(25), SWARM_SPEED_UNDER_30);
        assert_eq!(swarm_speed(30), SWARM_BASE_SPEED);
        assert_eq!(swarm_speed(45), SWARM_BASE_SPEED);
        assert_eq!(swarm_speed(0), SWARM_SPEED_UNDER_10);
    }

    #[test]
    fn test_reset_round_preserves_high_score() {
        let mut state = GameState::new(7);
        state.score = 120;
        state.high_score = 340;
        state.swarm_direction = -1.0;
        state.enemies.truncate(3);
        state.enemy_bullets.push(Rect::new(0.0, 0.0, 4.0, 10.0));
        state.phase = GamePhase::GameOverPause;

        state.reset_round();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 340);
        assert_eq!(state.swarm_direction, 1.0);
        assert_eq!(state.enemies.len(), ENEMY_ROWS * ENEMY_COLS);
        assert!(state.enemy_bullets.is_empty());
        assert!(state.player_bullet.is_none());
        assert_eq!(state.ship, GameState::centered_ship());
    }
}
