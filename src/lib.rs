pub mod config;
pub mod events;
pub mod gui;
pub mod params;
pub mod radius;
pub mod snippet;
pub mod sys;
