//! Draw-list construction
//!
//! Converts a `GameState` into an ordered list of draw commands: sprites,
//! flat-color rectangles and anchored text. Pure and platform-free; the
//! frontend plays the list back and tests assert on it directly.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, Rect};

/// Which sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Alien,
}

/// A sprite at a screen position
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

/// Flat colors used for bullets and text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawColor {
    White,
    Green,
    Red,
}

/// A flat-color filled rectangle
#[derive(Debug, Clone, Copy)]
pub struct ColorRect {
    pub rect: Rect,
    pub color: DrawColor,
}

/// One draw command; list position is paint order, back to front
#[derive(Debug, Clone, Copy)]
pub enum DrawCmd {
    Sprite(Sprite),
    Fill(ColorRect),
}

/// Where a text line attaches on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
}

/// An anchored text line
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
    pub anchor: Anchor,
    pub color: DrawColor,
}

/// Everything the frontend must draw for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Sprites and fills in paint order; text always goes on top
    pub items: Vec<DrawCmd>,
    pub texts: Vec<Text>,
}

/// Build the draw list for the current state
///
/// Paint order: ship, player bullet, aliens, enemy bullets. On a hit frame
/// the player bullet sits under the alien it is entering.
pub fn build(state: &GameState) -> DrawList {
    let mut list = DrawList::default();

    list.items.push(DrawCmd::Sprite(Sprite {
        kind: SpriteKind::Ship,
        pos: state.ship.pos,
        size: state.ship.size,
    }));

    if let Some(bullet) = state.player_bullet {
        list.items.push(DrawCmd::Fill(ColorRect {
            rect: bullet,
            color: DrawColor::Green,
        }));
    }

    for enemy in &state.enemies {
        list.items.push(DrawCmd::Sprite(Sprite {
            kind: SpriteKind::Alien,
            pos: enemy.pos,
            size: enemy.size,
        }));
    }

    for bullet in &state.enemy_bullets {
        list.items.push(DrawCmd::Fill(ColorRect {
            rect: *bullet,
            color: DrawColor::Red,
        }));
    }

    list.texts.push(Text {
        value: format!("Score: {}", state.score),
        anchor: Anchor::TopLeft,
        color: DrawColor::White,
    });
    list.texts.push(Text {
        value: format!("High Score: {}", state.high_score),
        anchor: Anchor::TopRight,
        color: DrawColor::White,
    });

    if state.phase == GamePhase::GameOverPause {
        list.texts.push(Text {
            value: "Game Over!".to_string(),
            anchor: Anchor::Center,
            color: DrawColor::Red,
        });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn sprite_count(list: &DrawList, kind: SpriteKind) -> usize {
        list.items
            .iter()
            .filter(|item| matches!(item, DrawCmd::Sprite(s) if s.kind == kind))
            .count()
    }

    fn fills(list: &DrawList) -> Vec<ColorRect> {
        list.items
            .iter()
            .filter_map(|item| match item {
                DrawCmd::Fill(fill) => Some(*fill),
                DrawCmd::Sprite(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_playing_frame_contents() {
        let mut state = GameState::new(1);
        state.score = 30;
        state.high_score = 70;
        let list = build(&state);

        assert_eq!(sprite_count(&list, SpriteKind::Ship), 1);
        assert_eq!(sprite_count(&list, SpriteKind::Alien), ENEMY_ROWS * ENEMY_COLS);

        // No bullets live yet
        assert!(fills(&list).is_empty());

        assert_eq!(list.texts.len(), 2);
        assert_eq!(list.texts[0].value, "Score: 30");
        assert_eq!(list.texts[0].anchor, Anchor::TopLeft);
        assert_eq!(list.texts[1].value, "High Score: 70");
        assert_eq!(list.texts[1].anchor, Anchor::TopRight);
    }

    #[test]
    fn test_bullets_become_colored_rects() {
        let mut state = GameState::new(2);
        state.player_bullet = Some(Rect::new(100.0, 200.0, BULLET_WIDTH, BULLET_HEIGHT));
        state
            .enemy_bullets
            .push(Rect::new(300.0, 150.0, BULLET_WIDTH, BULLET_HEIGHT));
        state
            .enemy_bullets
            .push(Rect::new(500.0, 250.0, BULLET_WIDTH, BULLET_HEIGHT));

        let fills = fills(&build(&state));
        assert_eq!(fills.len(), 3);
        assert_eq!(fills[0].color, DrawColor::Green);
        assert!(fills[1..].iter().all(|r| r.color == DrawColor::Red));
    }

    #[test]
    fn test_player_bullet_paints_under_aliens() {
        let mut state = GameState::new(4);
        state.player_bullet = Some(Rect::new(100.0, 200.0, BULLET_WIDTH, BULLET_HEIGHT));

        let list = build(&state);
        let bullet_at = list
            .items
            .iter()
            .position(|item| matches!(item, DrawCmd::Fill(f) if f.color == DrawColor::Green))
            .unwrap();
        let first_alien_at = list
            .items
            .iter()
            .position(|item| matches!(item, DrawCmd::Sprite(s) if s.kind == SpriteKind::Alien))
            .unwrap();

        // Aliens paint over the player bullet on overlap frames
        assert!(bullet_at < first_alien_at);
        // And the ship paints under everything
        assert!(matches!(
            list.items[0],
            DrawCmd::Sprite(Sprite {
                kind: SpriteKind::Ship,
                ..
            })
        ));
    }

    #[test]
    fn test_game_over_message_only_during_pause() {
        let mut state = GameState::new(3);
        let center_text = |list: &DrawList| {
            list.texts
                .iter()
                .any(|t| t.anchor == Anchor::Center && t.value == "Game Over!")
        };

        assert!(!center_text(&build(&state)));

        state.phase = GamePhase::GameOverPause;
        state.pause_ticks = GAME_OVER_PAUSE_TICKS;
        assert!(center_text(&build(&state)));
    }
}
