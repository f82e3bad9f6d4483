mod commands;
mod report;

pub use commands::{execute, Cli};
