// Role-gated order gateway: HTTP surface, permission checks and the order service seam
pub mod api;
pub mod config;
pub mod models;
pub mod security;
pub mod service;
pub mod utils;
