// Authentication: client-side validation, then one backend request per action.
// Login success is persisted through the session; nothing else is stored.

pub mod flow;
pub mod models;
pub mod validation;

pub use flow::{login, logout, register};
