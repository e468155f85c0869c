/*!
* Headless core of a Life-family cellular automaton simulator.
*
* Every generation, a dead cell is born if its number of living neighbors is
* in the rule's born set, and a living cell survives if that number is in the
* survive set. Conway's Game of Life is born {3}, survive {2, 3}.
* The grid is a torus: its edges wrap around.
*/
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod library;
pub mod preset;
pub mod rules;
pub mod simulation;

pub use cell::{Cell, DisplayState, Transition};
pub use config::{Config, Palette, Rgb};
pub use engine::{advance, Generation};
pub use error::{Error, Result};
pub use grid::Grid;
pub use preset::Preset;
pub use rules::{NeighborSet, Rule};
pub use simulation::{Frame, RunState, Simulation};
