pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod roster;
pub mod ui;
