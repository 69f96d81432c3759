use crate::game::hex::{AxialPoint, Direction};
use serde::Serialize;

/// A player's spaceship. A ship has a position and a velocity on the board,
/// a heading (the direction its nose points, which is cosmetic and
/// independent of velocity), and a fuel tank.
///
/// Ships can't be constructed directly; they are created by
/// [Game::new](crate::Game::new) from the session config and mutated only
/// through the motion engine operations in this crate. Nothing about a ship
/// outlives its session.
#[derive(Clone, Debug, Serialize)]
pub struct Ship {
    // These fields are all pub(super) so the motion engine and the session
    // can mutate them
    pub(super) name: String,

    /// Where the ship currently sits on the board.
    pub(super) position: AxialPoint,

    /// Per-turn displacement. Accumulated by acceleration commands and
    /// applied on every motion integration until changed. `(0, 0)` means
    /// the ship is stationary.
    pub(super) velocity: AxialPoint,

    /// The direction the ship faces. Never `NoAcceleration`.
    pub(super) heading: Direction,

    /// Remaining fuel units. Never goes below 0.
    pub(super) fuel: u32,

    /// Projected position one turn ahead, assuming no further acceleration.
    /// Purely for guidance display; recomputed after every acceleration and
    /// every motion integration.
    pub(super) guidance: AxialPoint,

    /// Name of the planet the ship was orbiting after its last turn, if any.
    pub(super) orbiting: Option<String>,
}

impl Ship {
    pub(super) fn new(
        name: String,
        position: AxialPoint,
        heading: Direction,
        fuel: u32,
    ) -> Self {
        debug_assert!(
            heading != Direction::NoAcceleration,
            "ship heading must be a compass direction"
        );
        Self {
            name,
            position,
            velocity: AxialPoint::ORIGIN,
            heading,
            fuel,
            // Stationary, so next turn's position is this turn's
            guidance: position,
            orbiting: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> AxialPoint {
        self.position
    }

    pub fn velocity(&self) -> AxialPoint {
        self.velocity
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn fuel(&self) -> u32 {
        self.fuel
    }

    /// The position this ship will occupy next turn if it just drifts.
    pub fn guidance(&self) -> AxialPoint {
        self.guidance
    }

    /// The planet this ship is currently orbiting, if any.
    pub fn orbiting(&self) -> Option<&str> {
        self.orbiting.as_deref()
    }

    /// A stationary ship has no velocity. Stationary ships get pulled by
    /// any gravity field they sit in; drifting ships pass through.
    pub fn is_stationary(&self) -> bool {
        self.velocity == AxialPoint::ORIGIN
    }

    /// The human-readable status block for this ship: name, remaining fuel,
    /// and the orbited planet when there is one.
    pub fn status_text(&self) -> String {
        let mut text = format!("{}\nfuel: {}", self.name, self.fuel);
        if let Some(planet) = &self.orbiting {
            text.push_str(&format!("\norbiting {planet}"));
        }
        text
    }
}
