// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(unused)]
#![warn(clippy::all)]

use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};
use log::debug;

use sokoban_astar::config::{Format, SolverConfig};
use sokoban_astar::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-astar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sokoban levels using A* over player moves")
        .arg(
            Arg::with_name("custom")
                .short("c")
                .long("custom")
                .help("print in custom format"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("print in XSB format (default)"),
        )
        .group(ArgGroup::with_name("format").arg("custom").arg("xsb"))
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("max-states")
                .long("max-states")
                .takes_value(true)
                .value_name("N")
                .help("give up after visiting N unique states"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("level file in XSB or custom format"),
        )
        .get_matches();

    let format = if matches.is_present("custom") {
        Format::Custom
    } else {
        Format::Xsb
    };

    let config = match matches.value_of("max-states") {
        None => SolverConfig::default(),
        Some(max) => match max.parse() {
            Ok(max) => SolverConfig::with_max_visited(max),
            Err(err) => {
                eprintln!("Invalid value for --max-states: {}", err);
                process::exit(1);
            }
        },
    };

    // required so it can't be missing
    let path = matches.value_of("file").unwrap_or_default();

    let level = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(current_dir) => eprintln!(
                "Can't load level {} in {}: {}",
                path,
                current_dir.display(),
                err
            ),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });
    debug!("Loaded level:\n{}", level);

    println!("Solving {}...", path);
    let solver_ok = level.solve(config).unwrap_or_else(|err| {
        eprintln!("Failed to solve: {}", err);
        process::exit(1);
    });

    if matches.is_present("stats") {
        println!("{}", solver_ok.stats);
    }

    match solver_ok.moves {
        Some(moves) => {
            println!("Found solution:");
            print!("{}", level.format_solution(&moves, format));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        None => println!("No solution"),
    }
}
