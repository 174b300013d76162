pub mod cli;
pub mod config;
pub mod postgres;
pub mod probe;
pub mod report;
