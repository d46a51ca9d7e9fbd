// Service module exports

pub mod ambient;
pub mod config;
pub mod countdown;
pub mod logo;
