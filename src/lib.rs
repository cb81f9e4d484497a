pub mod analyzer;
pub mod cli;
pub mod config;
pub mod formatters;
pub mod generated;
pub mod traversal;
pub mod types;
