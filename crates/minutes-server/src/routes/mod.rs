//! Request handlers.

pub mod health;
pub mod meetings;
pub mod upload;
