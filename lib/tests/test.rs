//! Whole-search tests on small budgets with known answers.

use lifeplets_lib::{Config, Error, Status};

/// Runs the search to exhaustion and collects the found diagrams.
fn enumerate(config: Config) -> Result<Vec<String>, Error> {
    let mut world = config.world()?;
    let mut patterns = Vec::new();
    loop {
        match world.search(None)? {
            Status::Found => patterns.push(world.display()),
            Status::None => return Ok(patterns),
            Status::Searching => unreachable!(),
        }
    }
}

#[test]
fn conway_budget_4() {
    let mut patterns = enumerate(Config::new(4)).unwrap();
    patterns.sort();
    // the tub and the block are the only still lifes with at most
    // four cells
    assert_eq!(patterns, vec![".o.\no.o\n.o.\n", "oo\noo\n"]);
}

#[test]
fn conway_budget_6() {
    let patterns = enumerate(Config::new(6)).unwrap();
    let beehive = ".oo.\no..o\n.oo.\n";
    let boat = "oo.\no.o\n.o.\n";
    assert!(patterns.iter().any(|p| p == beehive));
    assert!(patterns.iter().any(|p| p == boat));
    for pattern in &patterns {
        let cells = pattern.matches('o').count();
        assert!((4..=6).contains(&cells), "bad cell count in:\n{}", pattern);
    }
}

#[test]
fn single_cell_dies() {
    // a lone cell is not a still life of Conway's rule
    assert!(enumerate(Config::new(1)).unwrap().is_empty());
}

#[test]
fn inverted_single_cell() {
    // but it does vanish in one step
    let patterns = enumerate(Config::new(1).set_invert(true)).unwrap();
    assert_eq!(patterns, vec!["o\n"]);
}

#[test]
fn resumable_search() {
    let mut world = Config::new(4).world().unwrap();
    assert_eq!(world.search(Some(5)).unwrap(), Status::Searching);
    assert_eq!(world.search(None).unwrap(), Status::Found);
    assert_eq!(world.display().matches('o').count(), 4);
}

#[test]
fn bad_rule_string() {
    assert!(Config::new(4).set_rule("nonsense").world().is_err());
}
