// src/application/ports/mod.rs
pub mod security;
pub mod time;

pub type TokenManagerPort = dyn security::TokenManager;
pub type ClockPort = dyn time::Clock;
