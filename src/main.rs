//! Bat & Candy entry point
//!
//! Opens the window and runs the frame loop until the player quits.

use std::path::Path;

use macroquad::input::prevent_quit;
use macroquad::window::{Conf, next_frame};

use bat_and_candy::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bat_and_candy::platform::{FrameClock, KeyboardInput};
use bat_and_candy::{App, FileHighScores, Settings, renderer};

fn window_conf() -> Conf {
    Conf {
        window_title: "Bat & Candy".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Bat & Candy starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    // Window close is handled as a quit command
    prevent_quit();

    let store = FileHighScores::new(&settings.highscore_path);
    let mut app = App::new(&settings, store);
    let mut input = KeyboardInput;
    let mut clock = FrameClock::new(settings.frame_duration());

    loop {
        let dt_ms = clock.tick();
        app.step(&mut input, dt_ms);
        renderer::draw_frame(app.state(), &settings);
        if !app.is_running() {
            break;
        }
        next_frame().await;
    }

    log::info!("Bat & Candy exiting (best score {})", app.state().high_score);
}
