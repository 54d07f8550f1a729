pub mod config;
pub mod games;
