//! HTTP surface: JSON API under `/api/*` plus the embedded dashboard at `/`

pub mod handler;
pub mod server;

pub use server::HttpServer;
