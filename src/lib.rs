//! Grid-based Snake for the terminal.
//!
//! [`game::GameEngine`] holds the rules, [`session::Session`] drives it from
//! a one-shot [`timer::TickTimer`], and [`renderer`] draws a
//! [`scene::Scene`] with ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
