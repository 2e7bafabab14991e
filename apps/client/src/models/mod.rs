pub mod job;
pub mod resume;
pub mod task;
pub mod user;
