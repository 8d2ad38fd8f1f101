pub mod commands;
pub mod opts;
