//! __lifeplets-lib__ exhaustively enumerates the connected still lifes of a
//! [Life-like cellular automaton](https://conwaylife.com/wiki/Life-like_cellular_automaton),
//! up to a maximum number of live cells.
//!
//! A still life is a pattern that one step of the rule leaves unchanged.
//! Patterns are connected through the Moore neighborhood (orthogonally or
//! diagonally), and are pinned against translation only: rotations and
//! reflections of the same pattern are enumerated separately.
//!
//! By complementing the survival table ([`Rule::invert`]), the same search
//! enumerates connected patterns that vanish completely after one step.
//!
//! # Example
//!
//! ```rust
//! use lifeplets_lib::{Config, Status};
//!
//! let mut world = Config::new(4).world()?;
//! assert_eq!(world.search(None)?, Status::Found);
//! assert_eq!(world.display().matches('o').count(), 4);
//! # Ok::<(), lifeplets_lib::Error>(())
//! ```

mod bridge;
mod cells;
mod config;
mod connect;
mod error;
mod grid;
mod rules;
mod search;
mod world;

pub use cells::State;
pub use config::Config;
pub use error::Error;
pub use rules::Rule;
pub use search::Status;
pub use world::World;
