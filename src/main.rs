//! Grid Invaders entry point
//!
//! Wires the deterministic simulation to the macroquad window: sprite
//! loading, input sampling, 60 FPS frame pacing, draw-list playback and
//! high score persistence on game-over and quit.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use macroquad::prelude::*;

use grid_invaders::consts;
use grid_invaders::render::{self, Anchor, DrawCmd, DrawColor, DrawList, SpriteKind};
use grid_invaders::sim::{tick, GamePhase, GameState, TickInput};
use grid_invaders::Scoreboard;

/// Ship and alien textures, scaled to entity size at draw time
struct Sprites {
    ship: Texture2D,
    alien: Texture2D,
}

impl Sprites {
    /// Load all sprites; any missing or undecodable asset aborts startup
    async fn load() -> Result<Self> {
        Ok(Self {
            ship: load_sprite("assets/ship.png").await?,
            alien: load_sprite("assets/alien.png").await?,
        })
    }
}

async fn load_sprite(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|err| anyhow!("failed to load sprite '{path}': {err}"))?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Grid Invaders".to_string(),
        window_width: consts::SCREEN_WIDTH as i32,
        window_height: consts::SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let sprites = Sprites::load().await?;
    let mut scoreboard = Scoreboard::load(consts::HIGH_SCORE_FILE.as_ref());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed);
    state.high_score = scoreboard.best();
    log::info!("game initialized with seed {seed}");

    // Route the window close button through the save-then-exit path
    prevent_quit();

    let frame_budget = Duration::from_secs_f64(1.0 / consts::TICK_RATE as f64);
    let mut prev_phase = state.phase;

    loop {
        let frame_start = Instant::now();

        // Quit intent is honored at any time, including the game-over pause
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        let input = TickInput {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            fire: is_key_down(KeyCode::Space),
        };
        tick(&mut state, &input);

        // Persist on the transition into the terminal pause
        if state.phase == GamePhase::GameOverPause && prev_phase == GamePhase::Playing {
            let _ = scoreboard.record(state.high_score);
            scoreboard.save();
            log::info!(
                "game over at score {}, high score {}",
                state.score,
                state.high_score
            );
        }
        prev_phase = state.phase;

        draw_frame(&render::build(&state), &sprites);

        // Cooperative pacing: sleep out the remainder of the frame budget
        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
        next_frame().await;
    }

    let _ = scoreboard.record(state.high_score);
    scoreboard.save();
    Ok(())
}

/// Play back one draw list
fn draw_frame(list: &DrawList, sprites: &Sprites) {
    clear_background(BLACK);

    for item in &list.items {
        match item {
            DrawCmd::Sprite(sprite) => {
                let texture = match sprite.kind {
                    SpriteKind::Ship => &sprites.ship,
                    SpriteKind::Alien => &sprites.alien,
                };
                draw_texture_ex(
                    texture,
                    sprite.pos.x,
                    sprite.pos.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(sprite.size.x, sprite.size.y)),
                        ..Default::default()
                    },
                );
            }
            DrawCmd::Fill(fill) => draw_rectangle(
                fill.rect.pos.x,
                fill.rect.pos.y,
                fill.rect.size.x,
                fill.rect.size.y,
                color_of(fill.color),
            ),
        }
    }

    const FONT_SIZE: f32 = 30.0;
    const TEXT_MARGIN: f32 = 10.0;
    for text in &list.texts {
        let dims = measure_text(&text.value, None, FONT_SIZE as u16, 1.0);
        let (x, y) = match text.anchor {
            Anchor::TopLeft => (TEXT_MARGIN, TEXT_MARGIN + dims.offset_y),
            Anchor::TopRight => (
                consts::SCREEN_WIDTH - dims.width - TEXT_MARGIN,
                TEXT_MARGIN + dims.offset_y,
            ),
            Anchor::Center => (
                (consts::SCREEN_WIDTH - dims.width) / 2.0,
                consts::SCREEN_HEIGHT / 2.0,
            ),
        };
        draw_text(&text.value, x, y, FONT_SIZE, color_of(text.color));
    }
}

fn color_of(color: DrawColor) -> Color {
    match color {
        DrawColor::White => WHITE,
        DrawColor::Green => GREEN,
        DrawColor::Red => RED,
    }
}
