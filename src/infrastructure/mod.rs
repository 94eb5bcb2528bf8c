pub mod config;
pub mod repositories;
pub mod scheduler;
pub mod seed;
pub mod state;
