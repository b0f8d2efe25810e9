use clap::{Parser, Subcommand};
use fd_controllers::{ControllerId, catalog, controller};
use fd_core::ensure_finite;
use fd_engine::{InputMap, Role};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "fd-cli")]
#[command(about = "fuzzdrive CLI - fuzzy decision layer for an autonomous vehicle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the controllers in the catalog
    List,
    /// Show a controller's variables and rules
    Show {
        /// Controller name (as listed by `list`)
        controller: String,
        /// Dump the built engine configuration as JSON
        #[arg(long)]
        json: bool,
    },
    /// Speed control: acceleration and brake commands
    Speed {
        /// Distance to the car ahead, 0-100 m
        #[arg(long)]
        distance: f64,
        /// Current speed, 0-120 km/h
        #[arg(long)]
        speed: f64,
        /// Road surface code: 0 slippery, 1 normal, 2 rough
        #[arg(long)]
        road: f64,
    },
    /// Steering control: steering-angle command
    Steering {
        /// Lane deviation code: -1 left, 0 center, 1 right
        #[arg(long, allow_hyphen_values = true)]
        lane_dev: f64,
        /// Road curvature, 0 (straight) to 100 (sharp)
        #[arg(long)]
        curvature: f64,
        /// Obstacle position code: -1 left, 0 center, 1 right
        #[arg(long, allow_hyphen_values = true)]
        obstacle: f64,
    },
    /// Pedestrian response: deceleration and warning level
    Pedestrian {
        /// Pedestrian distance, 0-100 m
        #[arg(long)]
        distance: f64,
        /// Movement code: 0 stationary, 1 walking, 2 running
        #[arg(long)]
        movement: f64,
        /// Vehicle speed, 0-120 km/h
        #[arg(long)]
        speed: f64,
    },
    /// Adaptive cruise: throttle and brake commands
    Cruise {
        /// Distance to the lead vehicle, 0-100 m
        #[arg(long)]
        distance: f64,
        /// Relative speed to the lead vehicle, -50 to 50 km/h
        #[arg(long, allow_hyphen_values = true)]
        relative_speed: f64,
    },
    /// Parking assist: steering and creep-speed commands
    Parking {
        /// Distance to the nearest obstacle, 0-100 cm
        #[arg(long)]
        distance: f64,
        /// Entry angle into the spot, 0-180 degrees
        #[arg(long)]
        angle: f64,
    },
    /// Obstacle avoidance: steering and deceleration commands
    Obstacle {
        /// Obstacle distance, 0-100 m
        #[arg(long)]
        distance: f64,
        /// Obstacle position code: 0 left, 1 center, 2 right
        #[arg(long)]
        position: f64,
    },
    /// Traffic-signal response: deceleration and stop/go decision
    Signal {
        /// Signal color code: 0 red, 1 yellow, 2 green
        #[arg(long)]
        signal: f64,
        /// Distance to the stop line, 0-100 m
        #[arg(long)]
        distance: f64,
    },
    /// Road-condition adaptation: speed adjustment and brake sensitivity
    Road {
        /// Surface code: 0 dry, 1 wet, 2 icy
        #[arg(long)]
        road: f64,
        /// Visibility code: 0 clear, 1 foggy, 2 poor
        #[arg(long)]
        visibility: f64,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Show { controller, json } => cmd_show(&controller, json),
        Commands::Speed {
            distance,
            speed,
            road,
        } => cmd_evaluate(
            ControllerId::SpeedControl,
            &[("distance", distance), ("speed", speed), ("road", road)],
        ),
        Commands::Steering {
            lane_dev,
            curvature,
            obstacle,
        } => cmd_evaluate(
            ControllerId::SteeringControl,
            &[
                ("lane_dev", lane_dev),
                ("curvature", curvature),
                ("obstacle", obstacle),
            ],
        ),
        Commands::Pedestrian {
            distance,
            movement,
            speed,
        } => cmd_evaluate(
            ControllerId::PedestrianResponse,
            &[
                ("ped_distance", distance),
                ("ped_movement", movement),
                ("vehicle_speed", speed),
            ],
        ),
        Commands::Cruise {
            distance,
            relative_speed,
        } => cmd_evaluate(
            ControllerId::AdaptiveCruise,
            &[("distance", distance), ("relative_speed", relative_speed)],
        ),
        Commands::Parking { distance, angle } => cmd_evaluate(
            ControllerId::ParkingAssist,
            &[("distance", distance), ("angle", angle)],
        ),
        Commands::Obstacle { distance, position } => cmd_evaluate(
            ControllerId::ObstacleAvoidance,
            &[
                ("obstacle_distance", distance),
                ("obstacle_position", position),
            ],
        ),
        Commands::Signal { signal, distance } => cmd_evaluate(
            ControllerId::TrafficSignal,
            &[("signal", signal), ("distance", distance)],
        ),
        Commands::Road { road, visibility } => cmd_evaluate(
            ControllerId::RoadCondition,
            &[("road", road), ("visibility", visibility)],
        ),
    }
}

fn cmd_list() -> CliResult<()> {
    for def in catalog() {
        let inputs: Vec<&str> = def.input_names().collect();
        let outputs: Vec<&str> = def.output_names().collect();
        println!("{:<20} {}", def.name, def.description);
        println!(
            "{:<20} inputs: {}; outputs: {}",
            "",
            inputs.join(", "),
            outputs.join(", ")
        );
    }
    Ok(())
}

fn cmd_show(name: &str, json: bool) -> CliResult<()> {
    let def = catalog()
        .find(|def| def.name == name)
        .ok_or_else(|| format!("unknown controller '{name}' (try `fd-cli list`)"))?;
    let engine = def.build()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&engine)?);
        return Ok(());
    }

    println!("{}: {}", def.name, def.description);
    for variable in engine.variables() {
        let role = match variable.role() {
            Role::Antecedent => "input",
            Role::Consequent => "output",
        };
        let universe = variable.universe();
        let labels: Vec<&str> = variable.terms().map(|(label, _)| label).collect();
        println!(
            "  {role:<6} {:<18} [{}, {}] step {}: {}",
            variable.name(),
            universe.min(),
            universe.max(),
            universe.step(),
            labels.join(", ")
        );
    }
    println!("  rules: {}", engine.rules().len());
    Ok(())
}

fn cmd_evaluate(id: ControllerId, readings: &[(&'static str, f64)]) -> CliResult<()> {
    let def = controller(id);
    let engine = def.build()?;

    // Reject NaN/inf readings here; clap happily parses "NaN" as f64.
    for &(name, value) in readings {
        ensure_finite(value, name)?;
    }
    let inputs: InputMap = readings
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    let outputs = engine.evaluate(&inputs)?;

    tracing::debug!(controller = %def.name, ?inputs, "evaluated");
    for (name, value) in outputs {
        println!("{name}: {value:.2}");
    }
    Ok(())
}
