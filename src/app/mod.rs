pub mod commands;
pub mod controller;
pub mod events;
pub mod runtime;

pub use commands::parse_command;
pub use controller::{ControllerState, InteractionController};
pub use events::{Effect, Event};
pub use runtime::{Runtime, StdoutSink, SurfaceSink};
