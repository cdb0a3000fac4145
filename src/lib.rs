pub mod api;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod store;
