pub mod bookings;
pub mod directory;
pub mod qualifications;
pub mod schedule;
pub mod teacher;
