//! Grid snake with obstacles.
//!
//! The engine (`game`, `snake`, `placement`, `input`, `snapshot`, `scheduler`)
//! has no terminal dependency and can be stepped directly. The view modules
//! (`renderer`, `ui`, `terminal_runtime`) only read [`snapshot::Snapshot`]s;
//! `terminal_runtime` also turns key presses into [`input::GameInput`]s.

pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod placement;
pub mod renderer;
pub mod scheduler;
pub mod snake;
pub mod snapshot;
pub mod terminal_runtime;
pub mod ui;
