//! Browser form and JSON API for the cost calculator

pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::WebServer;
