pub mod backend;
pub mod config;
pub mod derived;
pub mod events;
pub mod fallback;
pub mod feed;
pub mod models;
pub mod runtime;
pub mod tracing_setup;
