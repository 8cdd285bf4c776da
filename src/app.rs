//! Frame orchestration
//!
//! Each frame: poll input, advance the simulation, persist a new best score
//! if the run just ended. Drawing reads [`App::state`] afterwards.

use crate::highscores::HighScoreStore;
use crate::platform::{FrameInput, InputSource};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// A running game bound to its best-score store
pub struct App<S: HighScoreStore> {
    state: GameState,
    store: S,
    running: bool,
}

impl<S: HighScoreStore> App<S> {
    pub fn new(settings: &Settings, store: S) -> Self {
        let seed = settings.session_seed();
        let high_score = store.load();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, settings.tuning.clone(), high_score),
            store,
            running: true,
        }
    }

    /// Poll `input` and run one frame. Returns false once the player quits.
    pub fn step<I: InputSource>(&mut self, input: &mut I, dt_ms: f32) -> bool {
        let frame = input.poll();
        self.frame(&frame, dt_ms)
    }

    /// Run one frame with already-polled input
    pub fn frame(&mut self, input: &FrameInput, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        for event in tick(&mut self.state, &input.tick, dt_ms) {
            self.handle_event(event);
        }

        if input.quit {
            log::info!("Quit requested");
            self.running = false;
        }
        self.running
    }

    fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => log::info!("Run started"),
            GameEvent::Paused => log::debug!("Paused"),
            GameEvent::Resumed => log::debug!("Resumed"),
            GameEvent::ObstaclePassed { score } => log::debug!("Obstacle passed, score {}", score),
            GameEvent::CandyCollected { score } => log::debug!("Candy collected, score {}", score),
            GameEvent::GameOver {
                score,
                new_high_score,
            } => {
                log::info!("Game over with score {}", score);
                if new_high_score {
                    log::info!("New best score: {}", score);
                    self.store.save(score);
                }
            }
            GameEvent::Restarted => log::info!("Game restarted"),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
