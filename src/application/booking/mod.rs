pub mod back;
pub mod close;
pub mod details;
pub mod forms;
pub mod get;
pub mod open;
pub mod payment;
pub mod sessions;
pub mod workflow;
