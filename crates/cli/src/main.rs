use anyhow::{anyhow, Context};
use config::{Config, File};
use hexdrift::{timed, AxialPoint, Direction, Game, GameConfig, ShipEvent, TurnOutcome};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for driving hexdrift space-navigation sessions.
///
/// Reads a command script (one `<ship> <direction>` command per line)
/// and plays it against a session, printing status updates and turn
/// outcomes as it goes.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexdrift")]
struct Opt {
    /// Path to a config file that defines the session (planets, ships,
    /// fuel capacity). Supported formats: JSON, TOML. Omit to play the
    /// built-in demo session
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Path to a command script. Each non-empty line is `<ship>
    /// <direction>` where direction is one of the six compass directions
    /// (e.g. north_east) or no_acceleration to coast; `#` starts a
    /// comment. Reads commands from stdin when omitted
    #[structopt(short, long)]
    script: Option<PathBuf>,

    /// Per-turn output format
    #[structopt(long, default_value = "text")]
    output: OutputMode,

    /// If given, the resolved session config is written here as TOML
    /// before play starts. Useful for turning the demo session into a
    /// starting point
    #[structopt(long)]
    dump_config: Option<PathBuf>,

    /// If given, a JSON report of every ship's final state is written here
    /// after the script finishes
    #[structopt(short, long)]
    report: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// How each executed command is printed.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputMode {
    /// Human-readable status and event lines
    Text,
    /// One JSON object per command, for piping into other tools
    Json,
}

/// The JSON-lines record for a single executed command.
#[derive(Serialize)]
struct TurnRecord<'a> {
    ship: &'a str,
    #[serde(flatten)]
    outcome: &'a TurnOutcome,
}

/// The per-ship entry of the end-of-run report.
#[derive(Serialize)]
struct ShipReport<'a> {
    name: &'a str,
    position: AxialPoint,
    velocity: AxialPoint,
    heading: Direction,
    fuel: u32,
    orbiting: Option<&'a str>,
}

fn load_config(config_path: &Path) -> anyhow::Result<GameConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Split a script line into its ship name and direction. The direction is
/// the last whitespace-separated token, so ship names can contain spaces.
fn parse_command(line: &str) -> anyhow::Result<(&str, Direction)> {
    let (ship, direction) = line
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected `<ship> <direction>`, got {line:?}"))?;
    let direction = direction
        .parse()
        .map_err(|_| anyhow!("unknown direction {direction:?}"))?;
    Ok((ship.trim_end(), direction))
}

fn print_outcome(
    ship: &str,
    outcome: &TurnOutcome,
    output: OutputMode,
) -> anyhow::Result<()> {
    match output {
        OutputMode::Text => {
            for event in &outcome.events {
                match event {
                    ShipEvent::Status { text, .. } => println!("{text}"),
                    ShipEvent::OutOfFuel { ship } => {
                        println!("{ship} is out of fuel!")
                    }
                }
            }
            if let Some(orbit) = &outcome.orbit {
                println!("{ship} is orbiting {orbit}");
            }
            println!(
                "{ship} -> {} (screen {})",
                outcome.guidance,
                outcome.guidance.to_screen_space()
            );
        }
        OutputMode::Json => {
            let record = TurnRecord { ship, outcome };
            println!(
                "{}",
                serde_json::to_string(&record)
                    .context("error serializing turn record")?
            );
        }
    }
    Ok(())
}

/// Play every command in the script against the session.
fn run_script(
    game: &mut Game,
    reader: impl BufRead,
    output: OutputMode,
) -> anyhow::Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("error reading command script")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (ship, direction) = parse_command(line)
            .with_context(|| format!("error on line {}", index + 1))?;
        let outcome = game
            .command(ship, direction)
            .with_context(|| format!("error on line {}", index + 1))?;
        print_outcome(ship, &outcome, output)?;
    }
    Ok(())
}

fn write_report(game: &Game, report_path: &Path) -> anyhow::Result<()> {
    let reports: Vec<ShipReport<'_>> = game
        .ships()
        .map(|ship| ShipReport {
            name: ship.name(),
            position: ship.position(),
            velocity: ship.velocity(),
            heading: ship.heading(),
            fuel: ship.fuel(),
            orbiting: ship.orbiting(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&reports)
        // Panics only if the report format isn't serializable (a bug)
        .expect("error serializing report");
    fs::write(report_path, json).with_context(|| {
        format!("error writing report to {report_path:?}")
    })?;
    info!("Wrote report to {:?}", report_path);
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GameConfig::default(),
    };

    if let Some(dump_path) = &opt.dump_config {
        let toml = toml::to_string_pretty(&config)
            // Panics only if the config format isn't serializable (a bug)
            .expect("error serializing config");
        fs::write(dump_path, toml).with_context(|| {
            format!("error writing config to {dump_path:?}")
        })?;
    }

    let mut game = Game::new(config)?;

    timed!("Command script", log::Level::Info, {
        match &opt.script {
            Some(script_path) => {
                let file = fs::File::open(script_path).with_context(|| {
                    format!("error opening script {script_path:?}")
                })?;
                run_script(&mut game, BufReader::new(file), opt.output)?
            }
            None => {
                let stdin = io::stdin();
                run_script(&mut game, stdin.lock(), opt.output)?
            }
        }
    });

    // Closing status sweep for every ship, in registration order
    if let OutputMode::Text = opt.output {
        for ship in game.ships() {
            println!("---");
            println!("{}", ship.status_text());
        }
    }

    if let Some(report_path) = &opt.report {
        write_report(&game, report_path)?;
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
