use hexdrift::{
    AxialPoint, Direction, Game, GameConfig, PlanetConfig, ShipConfig,
    ShipEvent,
};

/// One ship, one planet, with the ship a few cells southwest of the planet.
fn config() -> GameConfig {
    GameConfig {
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

#[test]
fn test_thrust_and_drift() {
    let mut game = Game::new(config()).unwrap();

    let outcome = game.command("Aurora", Direction::NorthEast).unwrap();
    let ship = game.ship("Aurora").unwrap();
    assert_eq!(ship.position(), AxialPoint::new(3, 3));
    assert_eq!(ship.velocity(), AxialPoint::new(1, 1));
    assert_eq!(ship.fuel(), 19);
    // Already facing northeast, so no turn animation
    assert_eq!(outcome.rotation, None);
    assert_eq!(outcome.guidance, AxialPoint::new(4, 4));
    assert_eq!(outcome.orbit, None);

    // Coasting keeps the drift going for free
    let outcome = game.command("Aurora", Direction::NoAcceleration).unwrap();
    let ship = game.ship("Aurora").unwrap();
    assert_eq!(ship.position(), AxialPoint::new(4, 4));
    assert_eq!(ship.fuel(), 19);
    assert!(outcome.events.is_empty());
}

#[test]
fn test_turn_rotates_through_shorter_arc() {
    let mut game = Game::new(config()).unwrap();
    let outcome = game.command("Aurora", Direction::West).unwrap();
    // Northeast -> west is two steps counterclockwise
    let rotation = outcome.rotation.unwrap();
    assert!((rotation - 2.0 * std::f64::consts::FRAC_PI_3).abs() < 1e-9);
    assert_eq!(game.ship("Aurora").unwrap().heading(), Direction::West);
}

#[test]
fn test_parked_ship_gets_pulled() {
    let mut config = config();
    // Park the ship in the planet's east wedge, one cell west of it
    config.ships[0].position = AxialPoint::new(4, 5);
    let mut game = Game::new(config).unwrap();

    let outcome = game.command("Aurora", Direction::NoAcceleration).unwrap();
    let ship = game.ship("Aurora").unwrap();
    // Pulled east, but no translation on the turn the pull happens
    assert_eq!(ship.velocity(), AxialPoint::new(1, 0));
    assert_eq!(ship.position(), AxialPoint::new(4, 5));
    assert_eq!(outcome.guidance, AxialPoint::new(5, 5));

    // Next coast carries it onto the planet's cell
    game.command("Aurora", Direction::NoAcceleration).unwrap();
    assert_eq!(game.ship("Aurora").unwrap().position(), AxialPoint::new(5, 5));
}

#[test]
fn test_orbit_capture() {
    let mut config = config();
    // Drop the ship two cells north of the planet's northeast-side wedge,
    // then send it sliding southeast
    config.ships[0].position = AxialPoint::new(6, 8);
    let mut game = Game::new(config).unwrap();
    let outcome = game.command("Aurora", Direction::SouthEast).unwrap();
    assert_eq!(outcome.orbit, None);

    // The drift lands on the wedge at (6, 6), whose pull direction is
    // southwest; southeast velocity is 60° off that, i.e. tangential
    let outcome = game.command("Aurora", Direction::NoAcceleration).unwrap();
    let ship = game.ship("Aurora").unwrap();
    assert_eq!(ship.position(), AxialPoint::new(6, 6));
    assert_eq!(outcome.orbit.as_deref(), Some("Thera"));
    assert_eq!(ship.orbiting(), Some("Thera"));

    // The status block picks the orbit up
    let status = game.status("Aurora").unwrap();
    assert!(status.contains("Aurora"));
    assert!(status.contains("orbiting Thera"));
}

#[test]
fn test_fuel_exhaustion() {
    let mut config = config();
    config.fuel_capacity = 1;
    let mut game = Game::new(config).unwrap();

    let outcome = game.command("Aurora", Direction::East).unwrap();
    assert_eq!(game.ship("Aurora").unwrap().fuel(), 0);
    assert!(outcome
        .events
        .iter()
        .any(|event| matches!(event, ShipEvent::OutOfFuel { .. })));

    // Thrust is refused on an empty tank, but coasting still works: the
    // ship keeps drifting forever
    assert!(game.command("Aurora", Direction::East).is_err());
    let before = game.ship("Aurora").unwrap().position();
    let outcome = game.command("Aurora", Direction::NoAcceleration).unwrap();
    assert_eq!(
        game.ship("Aurora").unwrap().position(),
        before + AxialPoint::new(1, 0)
    );
    // And the out-of-fuel notification never repeats
    assert!(outcome.events.is_empty());
}

#[test]
fn test_status_on_demand() {
    let game = Game::new(config()).unwrap();
    assert_eq!(game.status("Aurora").unwrap(), "Aurora\nfuel: 20");
}
