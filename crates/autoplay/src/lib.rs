//! Seeded self-play over the core table API.

mod action;
mod config;
mod error;
mod objective;
mod runner;
mod simulator;
mod trace;

pub use action::*;
pub use config::*;
pub use error::*;
pub use objective::*;
pub use runner::*;
pub use simulator::*;
pub use trace::*;
