pub mod api;
pub mod config;
pub mod engine;
pub mod forecast;
pub mod telemetry;
