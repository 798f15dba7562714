//! CLI module graph.

pub mod account;
pub mod check;
pub mod command;
pub mod output;
pub mod paths;
pub mod run;
