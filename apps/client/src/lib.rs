pub mod api_client;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod guard;
pub mod jobs;
pub mod models;
pub mod resume;
pub mod session;
pub mod state;
pub mod tasks;

#[cfg(test)]
mod testing;
