use crate::game::hex::{AxialPoint, Direction};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a game session: the planets on the board, the
/// ships in play, and the shared tank size. Sessions are fully determined
/// by their config; there is no randomness anywhere in the simulation.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GameConfig {
    /// How much fuel every ship starts with. Each acceleration command
    /// burns one unit; a ship with an empty tank can only coast.
    #[validate(range(min = 1))]
    pub fuel_capacity: u32,

    /// The planets on the board. Each one gets six gravity wedges, one on
    /// every neighboring cell. Planets never move.
    #[validate]
    pub planets: Vec<PlanetConfig>,

    /// The ships in play, one per player. Turn order follows declaration
    /// order.
    #[validate]
    pub ships: Vec<ShipConfig>,
}

/// Placement of a single planet.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct PlanetConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub position: AxialPoint,
}

/// Starting state of a single ship.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct ShipConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub position: AxialPoint,

    /// Which way the ship faces at launch. Must be a compass direction,
    /// since a ship always faces somewhere.
    #[serde(default = "default_heading")]
    #[validate(custom = "validate_heading")]
    pub heading: Direction,
}

fn default_heading() -> Direction {
    Direction::NorthEast
}

fn validate_heading(heading: &Direction) -> Result<(), ValidationError> {
    if *heading == Direction::NoAcceleration {
        return Err(ValidationError::new("heading"));
    }
    Ok(())
}

impl Default for GameConfig {
    fn default() -> Self {
        // A small one-ship, one-planet demo system. Close enough for the
        // ship to reach the planet's gravity in a few turns, far enough to
        // need some flying first.
        Self {
            fuel_capacity: 20,
            planets: vec![PlanetConfig {
                name: "Thera".into(),
                position: AxialPoint::new(5, 5),
            }],
            ships: vec![ShipConfig {
                name: "Aurora".into(),
                position: AxialPoint::new(2, 2),
                heading: Direction::NorthEast,
            }],
        }
    }
}
