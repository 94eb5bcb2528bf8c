#[path = "../common/mod.rs"]
pub mod common;

mod bookings;
mod directory;
mod health;
mod middleware;
mod qualifications;
mod schedule;
mod teacher;
