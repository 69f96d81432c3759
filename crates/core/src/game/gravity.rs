use crate::game::hex::{AxialPoint, Direction, DirectionValues, PointMap};
use serde::Serialize;

/// One of the six directional gravity wedges surrounding a planet. The wedge
/// labeled with direction `d` sits on the *opposite* side of the planet from
/// `d`, so that a ship approaching the planet from direction `d` is the one
/// that encounters it. Immutable once the planet is built.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GravityField {
    /// The direction this wedge pulls stationary ships in.
    pub direction: Direction,
    /// The board cell the wedge occupies.
    pub position: AxialPoint,
}

/// A planet on the board. Each planet owns exactly six gravity wedges, one
/// per compass direction, covering all six of its neighboring cells for its
/// whole lifetime.
#[derive(Clone, Debug, Serialize)]
pub struct Planet {
    name: String,
    position: AxialPoint,
    fields: DirectionValues<GravityField>,
}

impl Planet {
    pub fn new(name: impl Into<String>, position: AxialPoint) -> Self {
        let fields = DirectionValues::from_fn(|direction| GravityField {
            direction,
            position: position + direction.invert().to_vector(),
        });
        Self {
            name: name.into(),
            position,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> AxialPoint {
        self.position
    }

    pub fn fields(&self) -> &DirectionValues<GravityField> {
        &self.fields
    }

    /// Get the wedge for one compass direction. Panics for
    /// `NoAcceleration`.
    pub fn field(&self, direction: Direction) -> &GravityField {
        self.fields.get(direction)
    }
}

/// A single gravity-field overlap at some ship's position: which planet the
/// field belongs to and which way it pulls. The motion engine only ever
/// consumes slices of these, so tests can hand-build them without any
/// spatial lookup at all.
#[derive(Copy, Clone, Debug)]
pub struct FieldContact<'a> {
    pub planet: &'a Planet,
    pub direction: Direction,
}

/// Position-indexed lookup over every gravity wedge of every planet in a
/// session. This plays the role of the spatial query collaborator: "what
/// gravity fields overlap this cell". Built once at session start; planets
/// never move.
#[derive(Clone, Debug, Default)]
pub struct GravityIndex {
    // Values are (index into the session's planet list, wedge direction).
    // Contact order is planet declaration order, then clockwise wedge
    // order, which keeps orbit tie-breaking deterministic.
    by_position: PointMap<Vec<(usize, Direction)>>,
}

impl GravityIndex {
    pub fn new(planets: &[Planet]) -> Self {
        let mut by_position: PointMap<Vec<(usize, Direction)>> =
            PointMap::default();
        for (index, planet) in planets.iter().enumerate() {
            for field in planet.fields().as_array() {
                by_position
                    .entry(field.position)
                    .or_default()
                    .push((index, field.direction));
            }
        }
        Self { by_position }
    }

    /// All gravity-field overlaps at the given cell. `planets` must be the
    /// same slice this index was built from.
    pub fn contacts_at<'a>(
        &self,
        planets: &'a [Planet],
        position: AxialPoint,
    ) -> Vec<FieldContact<'a>> {
        match self.by_position.get(&position) {
            Some(refs) => refs
                .iter()
                .map(|&(index, direction)| FieldContact {
                    planet: &planets[index],
                    direction,
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_placement() {
        let planet = Planet::new("Thera", AxialPoint::new(5, 5));
        // Each wedge sits opposite its own direction
        for direction in Direction::CLOCKWISE {
            let field = planet.field(*direction);
            assert_eq!(field.direction, *direction);
            assert_eq!(
                field.position,
                planet.position() + direction.invert().to_vector()
            );
        }
        // Concretely: the east wedge is on the planet's west side
        assert_eq!(
            planet.field(Direction::East).position,
            AxialPoint::new(4, 5)
        );
    }

    #[test]
    fn test_index_lookup() {
        let planets = vec![Planet::new("Thera", AxialPoint::new(5, 5))];
        let index = GravityIndex::new(&planets);

        let contacts = index.contacts_at(&planets, AxialPoint::new(4, 5));
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].direction, Direction::East);
        assert_eq!(contacts[0].planet.name(), "Thera");

        // The planet's own cell holds no wedge, and empty space holds
        // nothing at all
        assert!(index.contacts_at(&planets, AxialPoint::new(5, 5)).is_empty());
        assert!(index.contacts_at(&planets, AxialPoint::new(0, 0)).is_empty());
    }

    #[test]
    fn test_index_overlapping_planets() {
        // Two planets two cells apart share the cell between them
        let planets = vec![
            Planet::new("Thera", AxialPoint::new(0, 0)),
            Planet::new("Vesk", AxialPoint::new(2, 0)),
        ];
        let index = GravityIndex::new(&planets);

        let contacts = index.contacts_at(&planets, AxialPoint::new(1, 0));
        assert_eq!(contacts.len(), 2);
        // Declaration order breaks ties
        assert_eq!(contacts[0].planet.name(), "Thera");
        assert_eq!(contacts[0].direction, Direction::West);
        assert_eq!(contacts[1].planet.name(), "Vesk");
        assert_eq!(contacts[1].direction, Direction::East);
    }
}
