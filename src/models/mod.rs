// Module exports for models
// Plain data shared by the countdown services and the egui shell

pub mod color;
pub mod config;
pub mod target_date;
pub mod viewport;
