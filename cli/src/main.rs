//! A command-line tool to enumerate connected still lifes of a Life-like
//! cellular automaton within a live-cell budget.

use clap::{arg, command, value_parser};
use lifeplets_lib::{Config, Status};
use std::io::{self, Write};

fn config_from_args() -> Config {
    let matches = command!()
        .arg(
            arg!(<CELLS> "Maximum number of live cells")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(-r --rule <RULE> "Rule of the cellular automaton")
                .default_value("B3/S23"),
        )
        .arg(arg!(-v --vanish
            "Search for patterns that vanish in one step instead of still lifes"
        ))
        .get_matches();

    Config::new(*matches.get_one::<usize>("CELLS").unwrap())
        .set_rule(matches.get_one::<String>("rule").unwrap())
        .set_invert(matches.get_flag("vanish"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_args();
    let mut world = config.world()?;
    let mut out = io::stdout();

    loop {
        match world.search(None)? {
            Status::Found => {
                // the diagram ends with a newline, so this leaves a
                // blank line between patterns
                writeln!(out, "{}", world.display())?;
                out.flush()?;
            }
            Status::None => return Ok(()),
            Status::Searching => continue,
        }
    }
}
