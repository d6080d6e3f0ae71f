//! Game controller and engine options.
//!
//! The front-end (console, GUI, save/load) talks to the rules and the search
//! through [`EngineController`]; options arrive by name the way a protocol
//! `setoption` command would forward them.

mod controller;
mod options;

pub use controller::{EngineController, GameStatus};
pub use options::{EngineOptions, OptionError};
