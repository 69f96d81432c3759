//! The orbital motion engine: every mutation of a [Ship]'s state lives
//! here. All operations are total over well-formed inputs and return any
//! notifications they produce as values, so the engine has no knowledge of
//! whatever UI is watching.

use crate::game::{
    gravity::{FieldContact, Planet},
    hex::Direction,
    ship::Ship,
};
use serde::Serialize;
use std::f64::consts::{PI, TAU};

/// A notification produced by a state transition, for whatever collaborator
/// has registered interest in this ship. Emitted by value rather than
/// through a stored callback.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipEvent {
    /// The ship's status block changed and should be re-displayed. Emitted
    /// after every fuel change.
    Status { ship: String, text: String },
    /// The ship's tank just ran dry. Emitted exactly once, on the
    /// transition to zero fuel; a UI would disable the ship's acceleration
    /// controls on receipt.
    OutOfFuel { ship: String },
}

impl Ship {
    /// Apply one unit of thrust: `velocity += direction`. Velocity has no
    /// magnitude cap; drift accumulates until counter-thrust cancels it.
    pub fn accelerate(&mut self, direction: Direction) {
        self.velocity += direction.to_vector();
        self.project_guidance();
    }

    /// Turn the ship to face `heading`. Returns the signed rotation in
    /// radians, normalized into `(−π, π]` so the ship always turns through
    /// the shorter arc (the raw angle difference can be anywhere in
    /// `(−2π, 2π)`). Returns `None` without touching anything when the ship
    /// already faces that way or when `heading` is `NoAcceleration`: a
    /// ship's heading is always a compass direction.
    pub fn rotate_heading(&mut self, heading: Direction) -> Option<f64> {
        if heading == Direction::NoAcceleration || heading == self.heading {
            return None;
        }
        let mut delta = heading.angle() - self.heading.angle();
        while delta > PI {
            delta -= TAU;
        }
        while delta <= -PI {
            delta += TAU;
        }
        self.heading = heading;
        Some(delta)
    }

    /// Burn `units` of fuel, clamping at 0. Any change to the fuel level
    /// re-emits the ship's status; hitting 0 additionally emits
    /// [ShipEvent::OutOfFuel], once. Burning on an empty tank changes
    /// nothing and emits nothing.
    pub fn consume_fuel(&mut self, units: u32) -> Vec<ShipEvent> {
        let before = self.fuel;
        self.fuel = self.fuel.saturating_sub(units);

        let mut events = Vec::new();
        if self.fuel != before {
            events.push(ShipEvent::Status {
                ship: self.name.clone(),
                text: self.status_text(),
            });
            if self.fuel == 0 {
                events.push(ShipEvent::OutOfFuel {
                    ship: self.name.clone(),
                });
            }
        }
        events
    }

    /// Advance the ship one turn. A drifting ship translates by its
    /// velocity and ignores gravity (it passes *through* fields). A
    /// stationary ship stays put but picks up one unit of acceleration from
    /// every gravity field it is parked in, so a ship that comes to rest
    /// inside a wedge gets dragged toward the planet on the following
    /// turns. `contacts` must be the overlaps at the ship's current
    /// position.
    pub fn integrate(&mut self, contacts: &[FieldContact<'_>]) {
        if self.is_stationary() {
            for contact in contacts {
                self.accelerate(contact.direction);
            }
        } else {
            self.position += self.velocity;
        }
        self.project_guidance();
    }

    /// Check whether the ship is in a stable orbit: among the gravity
    /// fields overlapping its position, one whose pull direction is exactly
    /// 60° off the ship's velocity, i.e. the velocity is tangential to the
    /// field. When several contacted fields qualify, the first in contact
    /// order wins.
    pub fn detect_orbit<'a>(
        &self,
        contacts: &[FieldContact<'a>],
    ) -> Option<&'a Planet> {
        contacts
            .iter()
            .find(|contact| {
                let direction = contact.direction;
                self.velocity == direction.clockwise(1).to_vector()
                    || self.velocity == direction.clockwise(-1).to_vector()
            })
            .map(|contact| contact.planet)
    }

    pub(super) fn project_guidance(&mut self) {
        self.guidance = self.position + self.velocity;
    }
}
