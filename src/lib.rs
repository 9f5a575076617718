//! Event-driven Snake controller and the terminal host that drives it.
//!
//! [`Controller`] is the game core: it consumes timeout, direction and food
//! events and reports every decision through three [`Port`]s. The remaining
//! modules are the host: a board mirror, a food supply, the play session,
//! the terminal UI and a headless JSON-lines replay.

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod message;
pub mod port;
pub mod renderer;
pub mod replay;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

pub use controller::{Controller, TickOutcome};
pub use error::{ConfigurationError, ControllerError, Error};
pub use message::{Cell, Message};
pub use port::Port;
