//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one frame. The update order is fixed:
//! ship movement, player fire, bullet motion, swarm motion and enemy fire,
//! enemy bullet motion, collision resolution, wave respawn.

use rand::Rng;

use super::rect::Rect;
use super::state::{swarm_speed, GamePhase, GameState};
use crate::consts::*;

/// Input state sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Fire key held
    pub fire: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Terminal pause: count down, then reset everything but the high score.
    // Input is ignored until the round restarts.
    if state.phase == GamePhase::GameOverPause {
        state.pause_ticks = state.pause_ticks.saturating_sub(1);
        if state.pause_ticks == 0 {
            state.reset_round();
        }
        return;
    }

    // Ship movement, clamped to the screen
    let max_x = SCREEN_WIDTH - SHIP_WIDTH;
    if input.left {
        state.ship.translate_x_clamped(-SHIP_SPEED, max_x);
    }
    if input.right {
        state.ship.translate_x_clamped(SHIP_SPEED, max_x);
    }

    // Player fire: a no-op while a bullet is already live
    if input.fire && state.player_bullet.is_none() {
        state.player_bullet = Some(Rect::new(
            state.ship.center_x() - BULLET_WIDTH / 2.0,
            state.ship.top(),
            BULLET_WIDTH,
            BULLET_HEIGHT,
        ));
    }

    // Player bullet motion; despawns once its top reaches the screen edge
    if let Some(bullet) = &mut state.player_bullet {
        bullet.pos.y -= BULLET_SPEED;
    }
    if state.player_bullet.is_some_and(|b| b.top() <= 0.0) {
        state.player_bullet = None;
    }

    move_swarm_and_fire(state);

    // Enemy bullet motion; compact away anything past the bottom edge
    for bullet in &mut state.enemy_bullets {
        bullet.pos.y += BULLET_SPEED;
    }
    state.enemy_bullets.retain(|b| b.top() < SCREEN_HEIGHT);

    // Collision resolution, in fixed order.
    // 1. Player bullet vs enemies: first hit in grid order wins.
    if let Some(bullet) = state.player_bullet {
        if let Some(hit) = state.enemies.iter().position(|e| bullet.overlaps(e)) {
            // Order-preserving removal keeps grid iteration stable
            let _ = state.enemies.remove(hit);
            state.player_bullet = None;
            state.score += KILL_SCORE;
        }
    }

    // 2. Any enemy bullet overlapping the ship ends the round
    let ship = state.ship;
    if state.enemy_bullets.iter().any(|b| ship.overlaps(b)) {
        enter_game_over(state);
    }

    // 3. Any enemy reaching the bottom edge ends the round
    if state.enemies.iter().any(|e| e.bottom() >= SCREEN_HEIGHT) {
        enter_game_over(state);
    }

    // Wave progression: a cleared grid respawns immediately. This is a new
    // wave, not a loss; score and swarm direction carry over.
    if state.enemies.is_empty() {
        state.spawn_wave();
    }

    state.fire_cooldown = state.fire_cooldown.saturating_sub(1);
}

/// Move every enemy and let the swarm fire
///
/// The boundary check runs per enemy, after that enemy has moved. A reversal
/// flips the shared direction and drops the whole swarm at once, and is
/// re-evaluated every frame with no debounce: an enemy poised exactly at the
/// boundary can flip the direction on consecutive frames.
fn move_swarm_and_fire(state: &mut GameState) {
    let speed = swarm_speed(state.enemies.len());

    for i in 0..state.enemies.len() {
        state.enemies[i].pos.x += state.swarm_direction * speed;

        let moved = state.enemies[i];
        if moved.left() >= SCREEN_WIDTH - moved.size.x || moved.left() <= 0.0 {
            state.swarm_direction = -state.swarm_direction;
            for enemy in &mut state.enemies {
                enemy.pos.y += SWARM_DROP;
            }
        }

        // Shared cooldown gates eligibility; the first successful roll spawns
        // a bullet and re-arms it, blocking the rest of the swarm this frame.
        if state.fire_cooldown == 0 && state.rng.random_ratio(ENEMY_FIRE_CHANCE, 100) {
            let shooter = state.enemies[i];
            state.enemy_bullets.push(Rect::new(
                shooter.center_x() - BULLET_WIDTH / 2.0,
                shooter.bottom(),
                BULLET_WIDTH,
                BULLET_HEIGHT,
            ));
            state.fire_cooldown = ENEMY_FIRE_COOLDOWN_TICKS;
        }
    }
}

/// Transition into the game-over pause and reconcile the high score
fn enter_game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOverPause {
        return;
    }
    state.phase = GamePhase::GameOverPause;
    state.pause_ticks = GAME_OVER_PAUSE_TICKS;
    state.high_score = state.high_score.max(state.score);
}
