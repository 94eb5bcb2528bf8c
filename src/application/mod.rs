pub mod booking;
pub mod courses;
pub mod dashboard;
pub mod notifications;
pub mod qualifications;
pub mod schedule;
pub mod students;
pub mod teacher;
