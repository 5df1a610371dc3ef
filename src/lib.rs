//! Grid snake: a deterministic simulation core (`grid`, `snake`, `fruit`,
//! `collision`, `session`) driven by a terminal host (`driver`, `renderer`,
//! `terminal_runtime`, `ui`).

pub mod collision;
pub mod config;
pub mod driver;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
