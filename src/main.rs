//! Command line front end: loads the maps, runs one search and prints the result.

use safe_pathfinding::{
    find_shortest_path_with, find_shortest_safe_path_with,
    map::Grid,
    observer::{LogObserver, SearchEvent},
    parse::{check_location, parse_location, parse_success_threshold, parse_terrain_threshold},
    Cost, Error, Point,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;

use std::path::PathBuf;
use std::process::ExitCode;

/// Finds the cheapest, and optionally the safest, Path across a terrain map.
#[derive(Parser, Debug)]
#[command(name = "safe-pathfinding", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print more about the search. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest Path.
    Shortest(SearchArgs),
    /// Find the cheapest Path that is survived with a minimum probability.
    Safe {
        #[command(flatten)]
        search: SearchArgs,

        /// Map of percent encounter risks, same shape as the terrain map.
        success_map: PathBuf,

        /// Lowest acceptable survival probability, in 0..=1.
        #[arg(value_parser = parse_success_threshold)]
        success_threshold: f64,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Start location, as `row,col`.
    #[arg(value_parser = parse_location)]
    start: Point,

    /// Goal location, as `row,col`.
    #[arg(value_parser = parse_location)]
    goal: Point,

    /// Map of terrain costs.
    terrain_map: PathBuf,

    /// Highest terrain cost that may be entered, in 0..=1000.
    #[arg(value_parser = parse_terrain_threshold)]
    terrain_threshold: Cost,
}

impl SearchArgs {
    /// Loads the terrain map and checks that start and goal lie on it.
    fn load(&self) -> Result<(Grid, Point, Point), Error> {
        let terrain = Grid::load(&self.terrain_map)?;
        let start = check_location(self.start, &terrain)?;
        let goal = check_location(self.goal, &terrain)?;
        log::info!(
            "loaded {}x{} terrain map from {}",
            terrain.rows(),
            terrain.cols(),
            self.terrain_map.display()
        );
        Ok((terrain, start, goal))
    }
}

fn init_logger(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    let level = match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.init();
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Shortest(args) => {
            let (terrain, start, goal) = args.load()?;
            let mut observer = LogObserver::new(log::Level::Trace, false);

            let found =
                find_shortest_path_with(start, goal, &terrain, args.terrain_threshold, &mut observer)?;
            log::info!(
                "visited {} nodes, ignored {}",
                observer.count(SearchEvent::Visit),
                observer.count(SearchEvent::Ignore)
            );

            match found {
                Some(path) => println!("The path is {:?} with cost {}.", path.as_slice(), path.cost()),
                None => println!("No path found"),
            }
        }
        Command::Safe {
            search,
            success_map,
            success_threshold,
        } => {
            let (terrain, start, goal) = search.load()?;
            let risk = Grid::load(&success_map)?;
            let mut observer = LogObserver::new(log::Level::Trace, true);

            let found = find_shortest_safe_path_with(
                start,
                goal,
                &terrain,
                search.terrain_threshold,
                &risk,
                success_threshold,
                &mut observer,
            )?;
            log::info!(
                "visited {} nodes, ignored {}",
                observer.count(SearchEvent::Visit),
                observer.count(SearchEvent::Ignore)
            );

            match found {
                Some(path) => println!(
                    "The path is {:?} with cost {} and success probability {}",
                    path.as_slice(),
                    path.cost(),
                    path.survival_probability()
                ),
                None => println!("No path found"),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:?}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
