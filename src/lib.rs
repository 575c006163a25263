pub mod auth;
pub mod cli;
pub mod config;
pub mod git;
pub mod model;
pub mod prepare;

pub use prepare::{PrepareError, PrepareOptions, Preparer, PreparerBuilder};
