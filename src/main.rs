//! Brickout entry point
//!
//! The frame driver: polls input, advances the fixed-timestep
//! simulation, dispatches cue events to the sound bank, and draws the
//! frame.

use macroquad::prelude::*;

use brickout::audio::SoundBank;
use brickout::consts::*;
use brickout::sim::{tick, BrickColor, GameEvent, GamePhase, GameState, TickInput};

/// Font size for the score/lives HUD and the round-over message
const TEXT_SIZE: f32 = 30.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Brickout".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Brickout starting");

    // Audio failure at startup is fatal
    let sounds = match SoundBank::load().await {
        Ok(bank) => bank,
        Err(err) => {
            log::error!("Failed to initialize sound cues: {err:?}");
            std::process::exit(1);
        }
    };

    let mut state = GameState::new();
    let mut accumulator: f32 = 0.0;

    loop {
        // Quit is honored at the top of every frame, in any phase
        if is_key_pressed(KeyCode::Escape) {
            log::info!("Quit requested");
            break;
        }

        let input = TickInput {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            restart: is_key_pressed(KeyCode::R),
        };

        // One tick per elapsed 60 Hz slice, capped at MAX_SUBSTEPS
        accumulator += get_frame_time();
        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            for event in tick(&mut state, &input) {
                handle_event(&event, &state, &sounds);
            }
            accumulator -= TICK_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            accumulator = 0.0;
        }

        draw_frame(&state);
        next_frame().await;
    }
}

/// Forward a simulation event to the mixer and the log
fn handle_event(event: &GameEvent, state: &GameState, sounds: &SoundBank) {
    sounds.play(event);
    match event {
        GameEvent::BallLost => log::info!("Ball lost, {} lives left", state.lives),
        GameEvent::GameOver => log::info!("Game over, final score {}", state.score),
        GameEvent::LevelCleared => log::info!("Level cleared, final score {}", state.score),
        _ => {}
    }
}

fn draw_frame(state: &GameState) {
    clear_background(BLACK);
    match state.phase {
        GamePhase::Playing => draw_playfield(state),
        GamePhase::GameOver => draw_center_text("Game Over! Press R to Restart"),
        GamePhase::LevelCleared => draw_center_text("Level Cleared! Press R to Restart"),
    }
}

fn draw_playfield(state: &GameState) {
    for brick in state.bricks.iter().filter(|b| b.active) {
        draw_rectangle(
            brick.rect.x,
            brick.rect.y,
            brick.rect.w,
            brick.rect.h,
            brick_color(brick.color),
        );
    }

    let paddle = &state.paddle.rect;
    draw_rectangle(paddle.x, paddle.y, paddle.w, paddle.h, WHITE);

    let ball = &state.ball.rect;
    draw_circle(ball.center_x(), ball.center_y(), BALL_SIZE / 2.0, WHITE);

    draw_text(&format!("Score: {}", state.score), 10.0, 28.0, TEXT_SIZE, WHITE);
    draw_text(
        &format!("Lives: {}", state.lives),
        SCREEN_WIDTH - 100.0,
        28.0,
        TEXT_SIZE,
        WHITE,
    );
}

fn draw_center_text(text: &str) {
    let size = measure_text(text, None, TEXT_SIZE as u16, 1.0);
    draw_text(
        text,
        (SCREEN_WIDTH - size.width) / 2.0,
        SCREEN_HEIGHT / 2.0,
        TEXT_SIZE,
        WHITE,
    );
}

fn brick_color(color: BrickColor) -> Color {
    match color {
        BrickColor::Red => RED,
        BrickColor::Orange => ORANGE,
        BrickColor::Yellow => YELLOW,
        BrickColor::Green => GREEN,
    }
}
