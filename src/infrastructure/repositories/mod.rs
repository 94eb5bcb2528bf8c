pub mod directory;
pub mod notifications;
pub mod qualifications;
pub mod schedule;
pub mod teacher;
