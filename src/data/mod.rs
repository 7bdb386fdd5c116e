//! External-service access layer.

pub mod discord;
