//! Hexdrift is a turn-based space-navigation game on a slanted hexagonal
//! grid. Players fire one unit of thrust per turn in one of six directions;
//! ships accumulate velocity, drift under it, and can be captured into
//! orbit by the gravity wedges surrounding each planet. This crate contains
//! the whole simulation core: coordinate math, the direction model, the
//! orbital motion engine, and the gravity field model. Presentation layers
//! are implemented elsewhere.
//!
//! ```
//! use hexdrift::{Direction, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//! let outcome = game.command("Aurora", Direction::NorthEast).unwrap();
//! println!("{}", outcome.guidance);
//! ```
//!
//! See [GameConfig] for how a session is set up.

mod config;
mod game;
mod screen;
mod util;

pub use crate::{
    config::{GameConfig, PlanetConfig, ShipConfig},
    game::{
        gravity::{FieldContact, GravityField, GravityIndex, Planet},
        hex::{AxialPoint, Direction, DirectionValues, PointMap, PointSet},
        motion::ShipEvent,
        ship::Ship,
        Game, ShipMap, TurnOutcome,
    },
    screen::Point2,
};
