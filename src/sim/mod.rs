//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Time enters only as a frame delta in milliseconds
//! - Seeded RNG only
//! - Entities are plain structs kept in spawn order

pub mod collision;
pub mod geom;
pub mod mask;
pub mod physics;
pub mod sdf;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geom::Rect;
pub use mask::Mask;
pub use sdf::{BatOutline, CandyOutline};
pub use state::{Bat, Candy, GamePhase, GameState, Obstacle};
pub use tick::{GameEvent, TickInput, tick};
