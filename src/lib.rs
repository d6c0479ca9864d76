pub mod cli;
pub mod commands;
pub mod nbscan;
pub mod utils;
