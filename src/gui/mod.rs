pub mod app;
pub mod content;
pub mod diagram;
pub mod panel;
pub mod theme;
