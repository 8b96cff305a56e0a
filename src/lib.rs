pub mod analysis;
pub mod app;
pub mod data;
pub mod ui;
