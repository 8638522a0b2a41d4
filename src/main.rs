//! Schelling City - Entry Point
//!
//! Builds a city from configuration (or a snapshot), then either runs a fixed
//! number of ticks headless or drops into a small command loop.

use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use schelling_city::city::City;
use schelling_city::core::config::CityConfig;
use schelling_city::core::error::Result;
use schelling_city::persistence::{CityStore, SnapshotStore, TextStore};
use schelling_city::render::{collect_render_items, AsciiSurface, RenderItem, RenderSurface};
use schelling_city::simulation::census::CityCensus;
use schelling_city::simulation::tick::SimulationEvent;

/// Grid city simulation with Schelling-style agents
#[derive(Parser, Debug)]
#[command(name = "schelling-city")]
#[command(about = "Run a grid city of agents, lights and walkers")]
struct Args {
    /// City configuration (TOML). Uses the built-in reference city if absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open a binary snapshot instead of building from configuration
    #[arg(long)]
    open: Option<PathBuf>,

    /// Import occupants from a text file after the city is built
    #[arg(long)]
    import: Option<PathBuf>,

    /// Ticks to run before saving/exporting (headless) or before the prompt
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Save a binary snapshot when done
    #[arg(long)]
    save: Option<PathBuf>,

    /// Export occupants as text when done
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print a frame after every tick
    #[arg(long)]
    render: bool,

    /// Skip the command loop
    #[arg(long)]
    headless: bool,

    /// Print the final census as JSON
    #[arg(long)]
    summary_json: bool,
}

struct Session {
    city: City,
    snapshots: SnapshotStore,
    text: TextStore,
    surface: Option<Box<dyn RenderSurface>>,
    items: Vec<RenderItem>,
}

impl Session {
    fn tick(&mut self) -> Result<Vec<SimulationEvent>> {
        let events = self.city.tick();
        if let Some(surface) = self.surface.as_mut() {
            collect_render_items(&self.city, &mut self.items);
            surface.present(self.city.current_tick(), self.city.size(), &self.items)?;
        }
        Ok(events)
    }

    fn run(&mut self, ticks: u64) -> Result<usize> {
        let mut events = 0;
        for _ in 0..ticks {
            events += self.tick()?.len();
        }
        Ok(events)
    }

    fn show(&mut self) {
        collect_render_items(&self.city, &mut self.items);
        print!(
            "{}",
            schelling_city::render::ascii::render_frame(self.city.size(), &self.items)
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => CityConfig::load_from_toml(path)?,
        None => CityConfig::default(),
    };
    let snapshots = SnapshotStore::new(config.snapshot_extension.clone());
    let text = TextStore::default();

    let mut city = match &args.open {
        Some(path) => snapshots.open(path)?,
        None => City::from_config(&config)?,
    };
    if let Some(path) = &args.import {
        text.import(&mut city, path)?;
    }
    tracing::info!(
        "City ready: {}x{} with {} occupants",
        city.size(),
        city.size(),
        city.occupant_count()
    );

    let mut session = Session {
        city,
        snapshots,
        text,
        surface: args
            .render
            .then(|| Box::new(AsciiSurface::new(io::stdout())) as Box<dyn RenderSurface>),
        items: Vec::with_capacity(config.population.len()),
    };

    if args.ticks > 0 {
        let events = session.run(args.ticks)?;
        tracing::info!("Ran {} ticks ({} events)", args.ticks, events);
    }

    if !args.headless {
        command_loop(&mut session)?;
    }

    if let Some(path) = &args.save {
        session.snapshots.save(&session.city, path)?;
    }
    if let Some(path) = &args.export {
        session.text.export(&session.city, path)?;
    }

    let census = CityCensus::take(&session.city);
    if args.summary_json {
        println!("{}", census.to_json()?);
    } else {
        println!("{}", census.summary());
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  tick / t        - Advance the city by one tick");
    println!("  run <n>         - Run n ticks");
    println!("  show            - Print the grid");
    println!("  status / s      - Show head counts");
    println!("  save <path>     - Save a binary snapshot");
    println!("  open <path>     - Replace the city with a snapshot");
    println!("  import <path>   - Add occupants from a text file");
    println!("  export <path>   - Write occupants to a text file");
    println!("  quit / q        - Exit");
}

fn command_loop(session: &mut Session) -> Result<()> {
    println!("\n=== SCHELLING CITY ===");
    print_help();
    println!();

    loop {
        print!("[tick {}] > ", session.city.current_tick());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if !execute(session, input) {
            break;
        }
    }

    println!(
        "\nGoodbye! Final state: {} occupants, {} ticks elapsed.",
        session.city.occupant_count(),
        session.city.current_tick()
    );
    Ok(())
}

/// Run one command line. Returns false when the session should end.
fn execute(session: &mut Session, input: &str) -> bool {
    let (command, argument) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "quit" | "q" => return false,
        "tick" | "t" => match session.tick() {
            Ok(events) => {
                println!(
                    "Tick {} complete ({} events).",
                    session.city.current_tick(),
                    events.len()
                );
                for event in &events {
                    println!("  {}", describe(event));
                }
            }
            Err(e) => tracing::error!("{}", e),
        },
        "run" => match argument.parse::<u64>() {
            Ok(n) => {
                println!("Running {} ticks...", n);
                if let Some(events) = report(session.run(n)) {
                    println!(
                        "Completed {} ticks ({} events). Now at tick {}.",
                        n,
                        events,
                        session.city.current_tick()
                    );
                }
            }
            Err(_) => println!("Usage: run <number>"),
        },
        "show" => session.show(),
        "status" | "s" => println!("{}", CityCensus::take(&session.city).summary()),
        "save" | "open" | "import" | "export" if argument.is_empty() => {
            println!("Usage: {} <path>", command);
        }
        "save" => {
            report(session.snapshots.save(&session.city, Path::new(argument)));
        }
        "open" => match session.snapshots.open(Path::new(argument)) {
            Ok(city) => session.city = city,
            Err(e) => tracing::error!("{}", e),
        },
        "import" => {
            report(session.text.import(&mut session.city, Path::new(argument)));
        }
        "export" => {
            report(session.text.export(&session.city, Path::new(argument)));
        }
        "help" | "h" => print_help(),
        _ => println!("Unknown command. Type 'help' for the list."),
    }
    true
}

/// Log a failed command and carry on
fn report<T>(result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}

fn describe(event: &SimulationEvent) -> String {
    match event {
        SimulationEvent::Moved { kind, from, to, .. } => format!("{} moved {} -> {}", kind, from, to),
        SimulationEvent::MoodChanged {
            kind,
            position,
            from,
            to,
            ..
        } => format!("{} at {} went {:?} -> {:?}", kind, position, from, to),
    }
}
