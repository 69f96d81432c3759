pub mod gravity;
pub mod hex;
pub mod motion;
pub mod ship;

use crate::{
    game::{
        gravity::{GravityIndex, Planet},
        hex::{AxialPoint, Direction, PointSet},
        motion::ShipEvent,
        ship::Ship,
    },
    GameConfig,
};
use anyhow::{anyhow, bail, ensure, Context};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;
use validator::Validate;

/// Ships keyed by name, in registration order. The ordering matters for
/// deterministic iteration (reports, status sweeps), so a plain hash map
/// won't do.
pub type ShipMap = IndexMap<String, Ship, FnvBuildHasher>;

/// A running game session: the planets on the board, the ships in play, and
/// the gravity index that answers spatial queries. All ship state is owned
/// here and mutated only through [Game::command]. Nothing survives the
/// session; there is no save/load.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    ships: ShipMap,
    planets: Vec<Planet>,
    gravity: GravityIndex,
}

/// Everything a single command produced, for whatever collaborators care:
/// the normalized rotation for an animated turn, the guidance point for a
/// projection marker, the orbited planet for the status display, and any
/// notifications the transition emitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnOutcome {
    /// Signed rotation in radians, in `(−π, π]`, if the heading changed.
    pub rotation: Option<f64>,
    /// Where the ship will be next turn if it just drifts.
    pub guidance: AxialPoint,
    /// Name of the planet the ship is now orbiting, if any.
    pub orbit: Option<String>,
    pub events: Vec<ShipEvent>,
}

impl Game {
    /// Start a session from a config. Returns an error if the config is
    /// invalid or names/positions collide; a started session can't fail.
    pub fn new(config: GameConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid config")?;

        let mut positions = PointSet::default();
        let mut planets: Vec<Planet> = Vec::with_capacity(config.planets.len());
        for planet_config in &config.planets {
            ensure!(
                positions.insert(planet_config.position),
                "duplicate planet position {}",
                planet_config.position
            );
            ensure!(
                planets.iter().all(|p| p.name() != planet_config.name),
                "duplicate planet name {:?}",
                planet_config.name
            );
            planets.push(Planet::new(
                &planet_config.name,
                planet_config.position,
            ));
        }
        let gravity = GravityIndex::new(&planets);

        let mut ships = ShipMap::default();
        for ship_config in &config.ships {
            let ship = Ship::new(
                ship_config.name.clone(),
                ship_config.position,
                ship_config.heading,
                config.fuel_capacity,
            );
            ensure!(
                ships.insert(ship_config.name.clone(), ship).is_none(),
                "duplicate ship name {:?}",
                ship_config.name
            );
        }

        info!(
            "Started session with {} ship(s) and {} planet(s)",
            ships.len(),
            planets.len()
        );
        Ok(Self {
            config,
            ships,
            planets,
            gravity,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self, name: &str) -> Option<&Ship> {
        self.ships.get(name)
    }

    /// All ships, in registration order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Execute one turn command for one ship.
    ///
    /// A compass direction runs the full sequence: accelerate, burn one
    /// unit of fuel, rotate to face the thrust, then integrate motion.
    /// `NoAcceleration` is a coast turn: motion integration only, no fuel,
    /// no rotation. Either way the turn finishes with an orbit check at the
    /// ship's (possibly new) position.
    ///
    /// Errors on an unknown ship name, and rejects acceleration from a ship
    /// with an empty tank (it can still coast).
    pub fn command(
        &mut self,
        ship: &str,
        direction: Direction,
    ) -> anyhow::Result<TurnOutcome> {
        let ship = self
            .ships
            .get_mut(ship)
            .ok_or_else(|| anyhow!("no such ship {ship:?}"))?;

        let mut events = Vec::new();
        let mut rotation = None;
        if direction != Direction::NoAcceleration {
            if ship.fuel() == 0 {
                bail!("{} is out of fuel and can only coast", ship.name());
            }
            ship.accelerate(direction);
            events.extend(ship.consume_fuel(1));
            rotation = ship.rotate_heading(direction);
        }

        let contacts =
            self.gravity.contacts_at(&self.planets, ship.position());
        ship.integrate(&contacts);

        // Orbit is judged at wherever the ship ended up
        let contacts =
            self.gravity.contacts_at(&self.planets, ship.position());
        let orbit = ship
            .detect_orbit(&contacts)
            .map(|planet| planet.name().to_owned());
        ship.orbiting = orbit.clone();

        debug!(
            "{}: position {}, velocity {}, fuel {}",
            ship.name(),
            ship.position(),
            ship.velocity(),
            ship.fuel()
        );
        Ok(TurnOutcome {
            rotation,
            guidance: ship.guidance(),
            orbit,
            events,
        })
    }

    /// The status block for one ship, recomputed on demand. This is the
    /// (re-)registration path for status watchers; in-turn updates arrive
    /// as [ShipEvent::Status] values instead.
    pub fn status(&self, ship: &str) -> anyhow::Result<String> {
        let ship = self
            .ships
            .get(ship)
            .ok_or_else(|| anyhow!("no such ship {ship:?}"))?;
        Ok(ship.status_text())
    }
}
